use yew::prelude::*;

use crate::config;
use crate::utils::security::is_valid_peruvian_phone;

/// Digits for `tel:`/`wa.me` links, only for numbers that look like a Peruvian mobile.
fn mobile_digits(phone: &str) -> Option<String> {
    if !is_valid_peruvian_phone(phone) {
        return None;
    }
    Some(phone.chars().filter(char::is_ascii_digit).collect())
}

struct ContactCard {
    icon: &'static str,
    title: &'static str,
    details: [String; 2],
}

fn contact_cards() -> Vec<ContactCard> {
    vec![
        ContactCard {
            icon: "📍",
            title: "Dirección",
            details: [config::COMPANY_ADDRESS.to_string(), config::COMPANY_CITY.to_string()],
        },
        ContactCard {
            icon: "📞",
            title: "Teléfonos",
            details: [
                config::COMPANY_PHONE.to_string(),
                format!("WhatsApp: {}", config::COMPANY_WHATSAPP),
            ],
        },
        ContactCard {
            icon: "✉️",
            title: "Email",
            details: [config::COMPANY_EMAIL.to_string(), config::RESERVATIONS_EMAIL.to_string()],
        },
        ContactCard {
            icon: "🕒",
            title: "Horario",
            details: [
                "Lun - Vie: 8:00 AM - 6:00 PM".to_string(),
                "Sáb: 9:00 AM - 2:00 PM".to_string(),
            ],
        },
    ]
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let whatsapp = mobile_digits(config::COMPANY_WHATSAPP);
    if whatsapp.is_none() {
        log::warn!("WhatsApp number is not a valid mobile, hiding quick links");
    }

    html! {
        <section id="contacto" class="section contact">
            <style>
                {r#"
                    .contact { background: #ffffff; }
                    .contact-cards {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }
                    .contact-card {
                        background: #f8fafc;
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                    }
                    .contact-card .icon { font-size: 1.75rem; }
                    .contact-card h4 { margin: 0.75rem 0 0.5rem; color: #0f172a; }
                    .contact-card p { margin: 0.2rem 0; color: #4b5563; font-size: 0.875rem; }
                    .quick-contact {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                        margin-top: 3rem;
                    }
                    @media (min-width: 768px) {
                        .quick-contact { grid-template-columns: repeat(3, 1fr); }
                    }
                    .quick-contact a {
                        display: block;
                        text-align: center;
                        color: white;
                        text-decoration: none;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 20px rgba(15, 23, 42, 0.12);
                    }
                    .quick-call { background: linear-gradient(90deg, #16a34a, #047857); }
                    .quick-whatsapp { background: linear-gradient(90deg, #22c55e, #16a34a); }
                    .quick-mail { background: linear-gradient(90deg, #2563eb, #1d4ed8); }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Contáctenos"}</h2>
                    <div class="section-rule"></div>
                    <p>{"Estamos listos para atenderle. Comuníquese con nosotros por el medio que prefiera."}</p>
                </div>

                <div class="contact-cards">
                    { for contact_cards().into_iter().map(|card| html! {
                        <div class="contact-card">
                            <div class="icon" aria-hidden="true">{card.icon}</div>
                            <h4>{card.title}</h4>
                            { for card.details.iter().map(|line| html! { <p>{line}</p> }) }
                        </div>
                    }) }
                </div>

                <div class="quick-contact">
                    {
                        match whatsapp {
                            Some(digits) => html! {
                                <>
                                    <a class="quick-call" href={format!("tel:+{}", digits)}>{"📞 Llamar Ahora"}</a>
                                    <a class="quick-whatsapp" href={format!("https://wa.me/{}", digits)}
                                        target="_blank" rel="noopener noreferrer">{"💬 WhatsApp"}</a>
                                </>
                            },
                            None => html! {},
                        }
                    }
                    <a class="quick-mail" href={format!("mailto:{}", config::COMPANY_EMAIL)}>{"✉️ Enviar Email"}</a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_whatsapp_produces_link_digits() {
        assert_eq!(mobile_digits(config::COMPANY_WHATSAPP).as_deref(), Some("51999888777"));
    }

    #[test]
    fn landlines_get_no_mobile_link() {
        assert_eq!(mobile_digits(config::COMPANY_PHONE), None);
    }
}
