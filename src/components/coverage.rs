use yew::prelude::*;

use crate::utils::accessibility::scroll_to_section;

struct Destination {
    name: &'static str,
    region: &'static str,
    routes: u32,
}

const DESTINATIONS: &[Destination] = &[
    Destination { name: "Lima", region: "Costa", routes: 15 },
    Destination { name: "Cusco", region: "Sierra", routes: 12 },
    Destination { name: "Arequipa", region: "Sierra", routes: 10 },
    Destination { name: "Trujillo", region: "Costa", routes: 8 },
    Destination { name: "Chiclayo", region: "Costa", routes: 7 },
    Destination { name: "Iquitos", region: "Selva", routes: 5 },
];

#[function_component(Coverage)]
pub fn coverage() -> Html {
    let custom_route = Callback::from(|_: MouseEvent| {
        scroll_to_section("contacto");
    });

    html! {
        <section id="rutas" class="section coverage">
            <style>
                {r#"
                    .coverage { background: #f8fafc; }
                    .coverage-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }
                    @media (min-width: 1024px) {
                        .coverage-grid { grid-template-columns: 1fr 1fr; }
                    }
                    .coverage-map {
                        background: linear-gradient(135deg, #1e3a8a, #0f172a);
                        border-radius: 1rem;
                        min-height: 400px;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        color: white;
                        padding: 2rem;
                    }
                    .coverage-map .compass { font-size: 3.5rem; margin-bottom: 1rem; }
                    .coverage-map p { color: #d1d5db; }
                    .coverage-stats { display: flex; gap: 2rem; margin-top: 1.5rem; }
                    .coverage-stats strong { display: block; color: #facc15; font-size: 1.25rem; }
                    .coverage-stats span { color: #9ca3af; font-size: 0.875rem; }
                    .destination {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        background: white;
                        border-radius: 0.5rem;
                        padding: 1.25rem 1.5rem;
                        margin-bottom: 1rem;
                        box-shadow: 0 4px 12px rgba(15, 23, 42, 0.06);
                        transition: transform 0.2s;
                    }
                    .destination:hover { transform: translateX(5px); }
                    .destination h4 { margin: 0; color: #0f172a; }
                    .destination p { margin: 0.2rem 0 0; color: #6b7280; font-size: 0.875rem; }
                    .destination-routes { color: #4b5563; }
                    .custom-route {
                        margin-top: 2rem;
                        background: linear-gradient(90deg, #fefce8, #fffbeb);
                        border: 2px solid #fde68a;
                        border-radius: 0.5rem;
                        padding: 1.5rem;
                    }
                    .custom-route h4 { margin: 0 0 0.5rem; color: #0f172a; }
                    .custom-route p { color: #4b5563; font-size: 0.875rem; }
                    .custom-route button {
                        background: #facc15;
                        color: #0f172a;
                        border: none;
                        border-radius: 0.5rem;
                        padding: 0.5rem 1.5rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Rutas y Cobertura"}</h2>
                    <div class="section-rule"></div>
                    <p>{"Conectamos los principales destinos del Perú con servicios regulares y personalizados"}</p>
                </div>

                <div class="coverage-grid">
                    <div class="coverage-map">
                        <div class="compass" aria-hidden="true">{"🧭"}</div>
                        <h3>{"Cobertura Nacional"}</h3>
                        <p>{"Operamos en más de 20 ciudades principales del Perú"}</p>
                        <div class="coverage-stats">
                            <div><strong>{"50+"}</strong><span>{"Rutas Activas"}</span></div>
                            <div><strong>{"3"}</strong><span>{"Regiones"}</span></div>
                        </div>
                    </div>

                    <div>
                        { for DESTINATIONS.iter().map(|dest| html! {
                            <div class="destination" key={dest.name}>
                                <div>
                                    <h4>{format!("📍 {}", dest.name)}</h4>
                                    <p>{dest.region}</p>
                                </div>
                                <span class="destination-routes">{format!("{} rutas", dest.routes)}</span>
                            </div>
                        }) }

                        <div class="custom-route">
                            <h4>{"¿No encuentra su destino?"}</h4>
                            <p>
                                {"Ofrecemos rutas personalizadas para cualquier destino en Perú. Contáctenos para una cotización especial."}
                            </p>
                            <button onclick={custom_route}>{"Solicitar Ruta Personalizada"}</button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
