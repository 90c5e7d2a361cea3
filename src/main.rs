use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod utils {
    pub mod accessibility;
    pub mod clock;
    pub mod debounce;
    pub mod security;
}
mod hooks {
    pub mod form_validation;
    pub mod responsive;
    pub mod scroll_spy;
}
mod services {
    pub mod recommendations;
    pub mod reservations;
    pub mod storage;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod coverage;
    pub mod fleet;
    pub mod footer;
    pub mod hero;
    pub mod reservation;
    pub mod responsive_indicator;
    pub mod services;
    pub mod skip_to_content;
    pub mod toast;
}
mod pages {
    pub mod home;
}
mod admin {
    pub mod dashboard;
}

use pages::home::Home;
use admin::dashboard::AdminDashboard;
use hooks::responsive::use_is_mobile;
use hooks::scroll_spy::use_scroll_spy;
use utils::accessibility::{scroll_to_section, toggle_body_scroll};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Admin => {
            info!("Rendering Admin page");
            html! { <AdminDashboard /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

const SCROLLED_THRESHOLD: f64 = 50.0;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let is_mobile = use_is_mobile();
    let active = use_scroll_spy(config::section_ids(), config::SCROLL_SPY_OFFSET);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                is_scrolled.set(scroll_y > SCROLLED_THRESHOLD);
            }) as Box<dyn FnMut()>);

            let window = window();
            if let Some(window) = &window {
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("Failed to register nav scroll listener");
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    // Body scroll stays locked only while the mobile menu is open
    use_effect_with_deps(move |open: &bool| {
        toggle_body_scroll(*open);
        || toggle_body_scroll(false)
    }, *menu_open);

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(move |is_mobile: &bool| {
            if !*is_mobile {
                menu_open.set(false);
            }
            || ()
        }, is_mobile);
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if scroll_to_section(id) {
                menu_open.set(false);
            }
        })
    };

    let links = |item_class: &'static str| -> Html {
        config::NAVIGATION_SECTIONS
            .iter()
            .map(|section| {
                let current = active.as_deref() == Some(section.id);
                html! {
                    <button
                        key={section.id}
                        class={classes!(item_class, current.then(|| "active"))}
                        onclick={go_to(section.id)}
                        aria-current={current.then(|| "page")}
                    >
                        {section.label}
                    </button>
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))} aria-label="Navegación principal">
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        background: rgba(15, 23, 42, 0.95);
                        transition: box-shadow 0.2s;
                    }
                    .top-nav.scrolled { box-shadow: 0 10px 20px rgba(0, 0, 0, 0.3); }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        height: 4rem;
                        padding: 0 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo { display: flex; align-items: center; gap: 0.75rem; color: white; }
                    .nav-logo-mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(135deg, #facc15, #f59e0b);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .nav-links { display: flex; gap: 1.25rem; }
                    .nav-link, .nav-admin {
                        background: none;
                        border: none;
                        color: #d1d5db;
                        font-size: 0.875rem;
                        cursor: pointer;
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.25rem;
                        text-decoration: none;
                    }
                    .nav-link:hover { color: white; }
                    .nav-link.active { color: #facc15; }
                    .nav-admin { color: #9ca3af; }
                    .nav-link:focus-visible, .burger-menu:focus-visible, .mobile-link:focus-visible {
                        outline: 2px solid #facc15;
                        outline-offset: 2px;
                    }
                    .burger-menu { background: none; border: none; color: white; font-size: 1.5rem; cursor: pointer; }
                    .mobile-menu { background: #1e293b; padding: 1rem; }
                    .mobile-link {
                        display: block;
                        width: 100%;
                        text-align: left;
                        background: none;
                        border: none;
                        color: #d1d5db;
                        padding: 0.6rem 1rem;
                        border-radius: 0.25rem;
                        cursor: pointer;
                        font-size: 1rem;
                        text-decoration: none;
                        box-sizing: border-box;
                    }
                    .mobile-link.active { background: #facc15; color: #0f172a; }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo">
                    <div class="nav-logo-mark" aria-hidden="true">{"🚌"}</div>
                    <span>{config::COMPANY_NAME}</span>
                </div>
                {
                    if is_mobile {
                        html! {
                            <button
                                class="burger-menu"
                                onclick={toggle_menu}
                                aria-label="Abrir menú de navegación"
                                aria-expanded={menu_open.to_string()}
                                aria-controls="mobile-menu"
                            >
                                { if *menu_open { "✕" } else { "☰" } }
                            </button>
                        }
                    } else {
                        html! {
                            <div class="nav-links">
                                { links("nav-link") }
                                <Link<Route> to={Route::Admin} classes="nav-admin">{"Admin"}</Link<Route>>
                            </div>
                        }
                    }
                }
            </div>
            {
                if is_mobile && *menu_open {
                    html! {
                        <div id="mobile-menu" class="mobile-menu">
                            { links("mobile-link") }
                            <Link<Route> to={Route::Admin} classes="mobile-link">{"Admin"}</Link<Route>>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
