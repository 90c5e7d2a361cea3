use yew::prelude::*;

use crate::config;

struct CompanyValue {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const VALUES: &[CompanyValue] = &[
    CompanyValue {
        icon: "🛡️",
        title: "Seguridad",
        description: "Vehículos certificados y conductores profesionales capacitados para garantizar su bienestar.",
    },
    CompanyValue {
        icon: "⏰",
        title: "Puntualidad",
        description: "Cumplimos con los horarios establecidos para que llegue siempre a tiempo a su destino.",
    },
    CompanyValue {
        icon: "❤️",
        title: "Confort",
        description: "Unidades modernas y cómodas equipadas con las mejores comodidades para su viaje.",
    },
    CompanyValue {
        icon: "🏆",
        title: "Excelencia",
        description: "Servicio de calidad respaldado por años de experiencia y clientes satisfechos.",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="nosotros" class="section about">
            <style>
                {r#"
                    .about { background: #ffffff; }
                    .about-story {
                        background: linear-gradient(90deg, #0f172a, #1e3a8a);
                        color: white;
                        border-radius: 1rem;
                        padding: 2.5rem;
                        margin-bottom: 4rem;
                    }
                    .about-story h3 { color: #facc15; margin-top: 0; }
                    .about-story p { color: #e5e7eb; line-height: 1.7; }
                    .about-slogan {
                        display: inline-block;
                        margin-top: 1.5rem;
                        background: #facc15;
                        color: #0f172a;
                        padding: 0.5rem 1.5rem;
                        border-radius: 0.5rem;
                    }
                    .values-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                    }
                    .value-card {
                        text-align: center;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        background: #f8fafc;
                        transition: transform 0.2s;
                    }
                    .value-card:hover { transform: translateY(-5px); }
                    .value-icon { font-size: 2rem; }
                    .value-card h4 { color: #0f172a; margin: 1rem 0 0.75rem; }
                    .value-card p { color: #4b5563; font-size: 0.875rem; }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Sobre Nosotros"}</h2>
                    <div class="section-rule"></div>
                    <p>
                        {"En "}<strong>{config::COMPANY_NAME}</strong>
                        {", somos una empresa familiar con más de 15 años de experiencia en el transporte de personal y turismo. \
                          Nos enorgullece conectar personas con sus destinos, ofreciendo servicios confiables y de calidad superior."}
                    </p>
                </div>

                <div class="about-story">
                    <h3>{"Nuestra Historia"}</h3>
                    <p>
                        {"Fundada con la visión de transformar el transporte en Perú, Mis Dos Marías nació del sueño de dos \
                          hermanas emprendedoras que buscaban ofrecer un servicio diferente: seguro, puntual y centrado en las \
                          necesidades del cliente. Hoy, somos líderes en transporte de personal y turismo, sirviendo a empresas, \
                          familias y viajeros de todo el país."}
                    </p>
                    <div class="about-slogan">{format!("\"{}\"", config::COMPANY_SLOGAN)}</div>
                </div>

                <div class="values-grid">
                    { for VALUES.iter().map(|value| html! {
                        <div class="value-card">
                            <div class="value-icon" aria-hidden="true">{value.icon}</div>
                            <h4>{value.title}</h4>
                            <p>{value.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
