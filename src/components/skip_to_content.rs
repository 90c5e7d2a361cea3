use yew::prelude::*;

use crate::config;

#[function_component(SkipToContent)]
pub fn skip_to_content() -> Html {
    html! {
        <a class="skip-link" href={format!("#{}", config::SKIP_LINK_TARGET)}>
            <style>
                {r#"
                    .skip-link {
                        position: absolute;
                        left: -9999px;
                        top: 1rem;
                        z-index: 100;
                        padding: 0.75rem 1.5rem;
                        background: #facc15;
                        color: #0f172a;
                        border-radius: 0.5rem;
                        text-decoration: none;
                    }
                    .skip-link:focus { left: 1rem; outline: 4px solid rgba(234, 179, 8, 0.5); }
                "#}
            </style>
            {"Saltar al contenido principal"}
        </a>
    }
}
