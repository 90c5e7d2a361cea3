use std::collections::HashMap;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::recommendations::describe_service;

struct Service {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    accent: &'static str,
}

const SERVICES: &[Service] = &[
    Service { id: "personal", name: "Transporte de Personal", icon: "💼", accent: "accent-blue" },
    Service { id: "turismo", name: "Turismo y Excursiones", icon: "🌴", accent: "accent-amber" },
    Service { id: "escolar", name: "Transporte Escolar", icon: "🏫", accent: "accent-green" },
    Service { id: "eventos", name: "Eventos Especiales", icon: "🎉", accent: "accent-purple" },
];

#[function_component(Services)]
pub fn services() -> Html {
    let descriptions = use_state(|| None::<HashMap<&'static str, String>>);

    {
        let descriptions = descriptions.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let mut loaded = HashMap::new();
                    for service in SERVICES {
                        loaded.insert(service.id, describe_service(service.name.to_string()).await);
                    }
                    log::debug!("Loaded {} service descriptions", loaded.len());
                    descriptions.set(Some(loaded));
                });
                || ()
            },
            (),
        );
    }

    html! {
        <section id="servicios" class="section services">
            <style>
                {r#"
                    .services { background: #f8fafc; }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
                        gap: 2rem;
                    }
                    .service-card {
                        background: white;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        box-shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
                        transition: transform 0.2s;
                    }
                    .service-card:hover { transform: translateY(-10px); }
                    .service-bar { height: 0.5rem; }
                    .service-body { padding: 1.5rem; }
                    .service-icon { font-size: 2.25rem; margin-bottom: 1rem; }
                    .service-body h4 { color: #0f172a; margin: 0 0 0.75rem; }
                    .service-body p { color: #4b5563; font-size: 0.875rem; line-height: 1.6; }
                    .service-loading { color: #9ca3af; font-size: 0.875rem; }
                    .accent-blue { background: linear-gradient(90deg, #2563eb, #1d4ed8); }
                    .accent-amber { background: linear-gradient(90deg, #eab308, #d97706); }
                    .accent-green { background: linear-gradient(90deg, #16a34a, #047857); }
                    .accent-purple { background: linear-gradient(90deg, #9333ea, #db2777); }
                    .ai-badge {
                        margin-top: 2rem;
                        text-align: center;
                    }
                    .ai-badge span {
                        display: inline-block;
                        background: linear-gradient(90deg, #f3e8ff, #fce7f3);
                        color: #7e22ce;
                        font-size: 0.875rem;
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Nuestros Servicios ✨"}</h2>
                    <div class="section-rule"></div>
                    <p>{"Ofrecemos soluciones de transporte adaptadas a cada necesidad, con tecnología de punta y atención personalizada."}</p>
                </div>

                <div class="services-grid" aria-busy={descriptions.is_none().to_string()}>
                    { for SERVICES.iter().map(|service| html! {
                        <article class="service-card" key={service.id}>
                            <div class={classes!("service-bar", service.accent)}></div>
                            <div class="service-body">
                                <div class="service-icon" aria-hidden="true">{service.icon}</div>
                                <h4>{service.name}</h4>
                                {
                                    match (*descriptions).as_ref().and_then(|d| d.get(service.id)) {
                                        Some(text) => html! { <p>{text}</p> },
                                        None => html! { <p class="service-loading">{"Generando descripción AI..."}</p> },
                                    }
                                }
                            </div>
                        </article>
                    }) }
                </div>

                <div class="ai-badge"><span>{"✨ Descripciones generadas con IA"}</span></div>
            </div>
        </section>
    }
}
