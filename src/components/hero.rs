use yew::prelude::*;

use crate::config;
use crate::utils::accessibility::scroll_to_section;

const STATS: &[(&str, &str)] = &[
    ("15+", "Años de Experiencia"),
    ("50+", "Vehículos en Flota"),
    ("10,000+", "Clientes Satisfechos"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let reserve_now = Callback::from(|_: MouseEvent| {
        if !scroll_to_section("reservar") {
            log::warn!("Reservation section not found");
        }
    });

    html! {
        <section id="inicio" class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        color: white;
                        background:
                            linear-gradient(90deg, rgba(15, 23, 42, 0.95), rgba(15, 23, 42, 0.8), rgba(30, 58, 138, 0.7)),
                            url('/assets/hero-bus.jpg') center / cover no-repeat;
                        padding: 6rem 1rem 4rem;
                    }
                    .hero h1 { font-size: clamp(2rem, 6vw, 3.5rem); margin: 0 0 1.5rem; }
                    .hero-tagline { color: #facc15; font-size: clamp(1.15rem, 3vw, 1.5rem); margin-bottom: 1rem; }
                    .hero-lead { color: #d1d5db; max-width: 42rem; margin: 0 auto 2rem; font-size: 1.1rem; }
                    .hero-cta {
                        background: #facc15;
                        color: #0f172a;
                        border: none;
                        border-radius: 0.5rem;
                        padding: 1rem 2rem;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: transform 0.2s, background 0.2s;
                    }
                    .hero-cta:hover { background: #eab308; transform: scale(1.05); }
                    .hero-stats {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                        margin-top: 4rem;
                    }
                    @media (min-width: 768px) {
                        .hero-stats { grid-template-columns: repeat(3, 1fr); }
                    }
                    .hero-stat {
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 0.5rem;
                        padding: 1.5rem;
                    }
                    .hero-stat-number { color: #facc15; font-size: 1.5rem; margin-bottom: 0.5rem; }
                    .hero-stat-label { color: #d1d5db; font-size: 0.875rem; }
                "#}
            </style>
            <div class="section-inner">
                <h1>{config::COMPANY_NAME}</h1>
                <p class="hero-tagline">{"Transporte de Personal y Turismo de Excelencia"}</p>
                <p class="hero-lead">
                    {"Conectamos destinos con seguridad, confort y puntualidad. Su viaje perfecto comienza con nosotros."}
                </p>
                <button class="hero-cta" onclick={reserve_now}>{"Reservar Ahora →"}</button>

                <div class="hero-stats">
                    { for STATS.iter().map(|(number, label)| html! {
                        <div class="hero-stat">
                            <div class="hero-stat-number">{*number}</div>
                            <div class="hero-stat-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
