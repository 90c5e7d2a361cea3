use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::utils::accessibility::scroll_to_section;

const SERVICE_NAMES: &[&str] = &[
    "Transporte de Personal",
    "Turismo y Excursiones",
    "Transporte Escolar",
    "Eventos Especiales",
    "Rutas Personalizadas",
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    let quick_links = config::NAVIGATION_SECTIONS
        .iter()
        .filter(|section| section.id != "reservar")
        .map(|section| {
            let id = section.id;
            let onclick = Callback::from(move |_: MouseEvent| {
                scroll_to_section(id);
            });
            html! {
                <li key={id}>
                    <button class="footer-link" {onclick}>{section.label}</button>
                </li>
            }
        });

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { background: #0f172a; color: white; padding: 3rem 1rem 1.5rem; }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .site-footer h4 { margin: 0 0 1rem; }
                    .site-footer p, .site-footer li { color: #9ca3af; font-size: 0.875rem; }
                    .site-footer ul { list-style: none; padding: 0; margin: 0; }
                    .site-footer li { padding: 0.2rem 0; }
                    .footer-link {
                        background: none;
                        border: none;
                        padding: 0;
                        color: #9ca3af;
                        cursor: pointer;
                        font: inherit;
                    }
                    .footer-link:hover { color: #facc15; }
                    .footer-brand { font-size: 1.1rem; margin-bottom: 1rem; }
                    .footer-social { display: flex; gap: 1rem; justify-content: center; margin: 2rem 0 1rem; }
                    .footer-social a { color: #9ca3af; text-decoration: none; }
                    .footer-social a:hover { color: #facc15; }
                    .footer-bottom {
                        border-top: 1px solid #1f2937;
                        padding-top: 1.5rem;
                        text-align: center;
                        color: #6b7280;
                        font-size: 0.8rem;
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">{"🚌 Mis Dos Marías"}</div>
                    <p>{"Empresa líder en transporte de personal y turismo en Perú, comprometidos con la excelencia y seguridad."}</p>
                </div>
                <div>
                    <h4>{"Enlaces Rápidos"}</h4>
                    <ul>{ for quick_links }</ul>
                </div>
                <div>
                    <h4>{"Servicios"}</h4>
                    <ul>{ for SERVICE_NAMES.iter().map(|name| html! { <li>{*name}</li> }) }</ul>
                </div>
                <div>
                    <h4>{"Contacto"}</h4>
                    <ul>
                        <li>{format!("📍 {}, Lima", config::COMPANY_ADDRESS)}</li>
                        <li>{format!("📞 {}", config::COMPANY_PHONE)}</li>
                        <li>{format!("✉️ {}", config::COMPANY_EMAIL)}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-social">
                <a href="https://facebook.com" target="_blank" rel="noopener noreferrer">{"Facebook"}</a>
                <a href="https://instagram.com" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                <a href="https://twitter.com" target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                <span>{"🇵🇪 Orgullosamente Peruanos"}</span>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {} Todos los derechos reservados.", year, config::COMPANY_NAME)}</p>
            </div>
        </footer>
    }
}
