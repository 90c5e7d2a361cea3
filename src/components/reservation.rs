use chrono::Local;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::{error, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::{use_toast, Toast, ToastKind};
use crate::config;
use crate::hooks::form_validation::{use_form_validation, FormValues, Rule, UseFormValidationHandle, ValidationRules};
use crate::services::recommendations::{draft_requirements, estimate_route, plan_tourist_visit, RouteEstimate};
use crate::services::reservations::{browser_store, ReservationRequest};
use crate::utils::accessibility::generate_aria_id;
use crate::utils::clock::SystemClock;
use crate::utils::security::{
    is_future_date, is_valid_email, is_valid_length, sanitize_input, RateLimiter, NAME_PATTERN, PHONE_PATTERN,
};

const FORM_ID: &str = "reservation-form";
const MAX_PASSENGERS: f64 = 50.0;

// Stored as u32, so "2.5" or "1e1" must not get past the f64 range check
static WHOLE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\s*$").expect("whole number pattern is valid"));

fn initial_values() -> FormValues {
    [
        ("nombre", ""),
        ("email", ""),
        ("telefono", ""),
        ("origen", ""),
        ("destino", ""),
        ("fecha", ""),
        ("pasajeros", "1"),
        ("comentarios", ""),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn reservation_rules() -> ValidationRules {
    let mut rules = ValidationRules::new();
    rules.insert(
        "nombre".into(),
        Rule::new()
            .required()
            .pattern(&NAME_PATTERN)
            .message("Ingrese un nombre válido (solo letras, 2 a 50 caracteres)"),
    );
    rules.insert(
        "email".into(),
        Rule::new().required().custom(is_valid_email).message("Ingrese un email válido"),
    );
    rules.insert(
        "telefono".into(),
        Rule::new()
            .required()
            .pattern(&PHONE_PATTERN)
            .min_length(7)
            .message("Ingrese un teléfono válido"),
    );
    rules.insert(
        "origen".into(),
        Rule::new().required().custom(|v| is_valid_length(v.trim(), 2, 60)),
    );
    rules.insert(
        "destino".into(),
        Rule::new().required().custom(|v| is_valid_length(v.trim(), 2, 60)),
    );
    rules.insert(
        "fecha".into(),
        Rule::new()
            .required()
            .custom(|value| is_future_date(value, Local::now().date_naive()))
            .message("Seleccione una fecha futura"),
    );
    rules.insert(
        "pasajeros".into(),
        Rule::new()
            .required()
            .pattern(&WHOLE_NUMBER)
            .min(1.0)
            .max(MAX_PASSENGERS)
            .message("Ingrese un número entero de pasajeros entre 1 y 50"),
    );
    rules.insert("comentarios".into(), Rule::new().max_length(1000));
    rules
}

fn passenger_count(values: &FormValues) -> u32 {
    values
        .get("pasajeros")
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(1)
}

/// Builds the stored request from already validated values.
fn request_from(values: &FormValues) -> ReservationRequest {
    let field = |name: &str| {
        values
            .get(name)
            .map(|v| sanitize_input(v))
            .unwrap_or_default()
    };
    ReservationRequest {
        name: field("nombre"),
        email: field("email"),
        phone: field("telefono"),
        origin: field("origen"),
        destination: field("destino"),
        travel_date: field("fecha"),
        passengers: passenger_count(values),
        comments: field("comentarios"),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Assistant {
    Requirements,
    Route,
    Tourist,
}

fn field_error(form: &UseFormValidationHandle, field: &str) -> Html {
    match form.error(field) {
        Some(message) if form.is_touched(field) => html! {
            <p class="field-error" id={format!("{}-error", field)} role="alert">{message}</p>
        },
        _ => html! {},
    }
}

#[function_component(ReservationSection)]
pub fn reservation_section() -> Html {
    let form = use_form_validation(initial_values, reservation_rules);
    let toast = use_toast();
    let loading = use_state(|| false);
    let submitted = use_state(|| false);
    let assistant = use_state(|| None::<Assistant>);
    let route = use_state(|| None::<RouteEstimate>);
    let tips = use_state(|| None::<String>);
    let limiter = use_mut_ref(|| {
        RateLimiter::new(SystemClock, config::SUBMIT_RATE_LIMIT, config::SUBMIT_RATE_WINDOW_MS)
    });
    let hint_id = use_state(|| generate_aria_id("reservar-ayuda"));

    let on_input = |field: &'static str| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.handle_change(field, &input.value());
        })
    };
    let on_blur = |field: &'static str| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| form.handle_blur(field))
    };
    let on_comments = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.handle_change("comentarios", &area.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let toast = toast.clone();
        let loading = loading.clone();
        let submitted = submitted.clone();
        let route = route.clone();
        let tips = tips.clone();
        let limiter = limiter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            if !form.validate_all() {
                toast.show("Por favor corrija los errores del formulario", ToastKind::Warning);
                return;
            }
            if !limiter.borrow_mut().check(FORM_ID) {
                warn!("Reservation submit rate limited");
                toast.show(
                    "Demasiadas solicitudes. Espere un minuto e intente nuevamente.",
                    ToastKind::Error,
                );
                return;
            }

            loading.set(true);
            let form = form.clone();
            let toast = toast.clone();
            let loading = loading.clone();
            let submitted = submitted.clone();
            let route = route.clone();
            let tips = tips.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                match browser_store().submit(request_from(&form.values())) {
                    Ok(reservation) => {
                        info!("Reservation {} submitted", reservation.id);
                        toast.show("¡Reserva recibida! Nos comunicaremos pronto.", ToastKind::Success);
                        submitted.set(true);
                        Timeout::new(config::SUBMITTED_RESET_MS, move || {
                            submitted.set(false);
                            form.reset();
                            route.set(None);
                            tips.set(None);
                        })
                        .forget();
                    }
                    Err(e) => {
                        error!("Failed to store reservation: {}", e);
                        toast.show(
                            "No se pudo guardar la reserva. Intente nuevamente.",
                            ToastKind::Error,
                        );
                    }
                }
                loading.set(false);
            });
        })
    };

    let trip_missing = {
        let toast = toast.clone();
        move |origin: &str, destination: &str| {
            if origin.trim().is_empty() || destination.trim().is_empty() {
                toast.show("Por favor ingrese origen y destino primero", ToastKind::Warning);
                true
            } else {
                false
            }
        }
    };

    let on_requirements = {
        let form = form.clone();
        let toast = toast.clone();
        let assistant = assistant.clone();
        let trip_missing = trip_missing.clone();
        Callback::from(move |_: MouseEvent| {
            let values = form.values();
            let origin = form.value("origen");
            let destination = form.value("destino");
            if trip_missing(&origin, &destination) {
                return;
            }
            assistant.set(Some(Assistant::Requirements));
            let form = form.clone();
            let assistant = assistant.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let text = draft_requirements(origin, destination, passenger_count(&values)).await;
                form.set_values(FormValues::from([("comentarios".to_string(), text)]));
                assistant.set(None);
                toast.show("Comentarios generados. Puede editarlos antes de enviar.", ToastKind::Info);
            });
        })
    };

    let on_route = {
        let form = form.clone();
        let assistant = assistant.clone();
        let route = route.clone();
        Callback::from(move |_: MouseEvent| {
            let origin = form.value("origen");
            let destination = form.value("destino");
            if trip_missing(&origin, &destination) {
                return;
            }
            assistant.set(Some(Assistant::Route));
            let assistant = assistant.clone();
            let route = route.clone();
            spawn_local(async move {
                route.set(Some(estimate_route(origin, destination).await));
                assistant.set(None);
            });
        })
    };

    let on_tourist = {
        let form = form.clone();
        let toast = toast.clone();
        let assistant = assistant.clone();
        let tips = tips.clone();
        Callback::from(move |_: MouseEvent| {
            let destination = form.value("destino");
            if destination.trim().is_empty() {
                toast.show("Por favor ingrese un destino primero", ToastKind::Warning);
                return;
            }
            assistant.set(Some(Assistant::Tourist));
            let assistant = assistant.clone();
            let tips = tips.clone();
            spawn_local(async move {
                tips.set(Some(plan_tourist_visit(destination).await));
                assistant.set(None);
            });
        })
    };

    let busy = |which: Assistant| *assistant == Some(which);
    let invalid = |field: &str| (form.is_touched(field) && form.error(field).is_some()).to_string();

    let submit_label = if *loading {
        "Enviando..."
    } else if *submitted {
        "✓ ¡Reserva Recibida!"
    } else {
        "Enviar Solicitud"
    };

    html! {
        <section id="reservar" class="section reservation">
            <style>
                {r#"
                    .reservation { background: #ffffff; }
                    .reservation-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 1024px) {
                        .reservation-grid { grid-template-columns: 2fr 1fr; }
                    }
                    .reservation-form {
                        background: #f8fafc;
                        border-radius: 1rem;
                        padding: 2rem;
                        box-shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
                    }
                    .form-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.25rem;
                        margin-bottom: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .form-grid { grid-template-columns: 1fr 1fr; }
                        .form-grid .wide { grid-column: span 2; }
                    }
                    .form-field label {
                        display: block;
                        font-size: 0.875rem;
                        color: #374151;
                        margin-bottom: 0.4rem;
                    }
                    .form-field input, .form-field textarea {
                        width: 100%;
                        padding: 0.6rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid #d1d5db;
                        box-sizing: border-box;
                        font: inherit;
                    }
                    .form-field input[aria-invalid="true"] { border-color: #ef4444; }
                    .field-error { color: #dc2626; font-size: 0.8rem; margin: 0.3rem 0 0; }
                    .comments-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 0.4rem;
                    }
                    .ai-chip {
                        font-size: 0.75rem;
                        background: linear-gradient(90deg, #9333ea, #db2777);
                        color: white;
                        border: none;
                        border-radius: 999px;
                        padding: 0.3rem 0.8rem;
                        cursor: pointer;
                    }
                    .submit-button {
                        width: 100%;
                        margin-top: 1.5rem;
                        padding: 0.8rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: linear-gradient(90deg, #2563eb, #1d4ed8);
                        color: white;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .submit-button:disabled, .ai-chip:disabled, .assistant-card button:disabled {
                        opacity: 0.5;
                        cursor: wait;
                    }
                    .assistant-card {
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        margin-bottom: 1.5rem;
                        border: 2px solid #bfdbfe;
                        background: #eff6ff;
                    }
                    .assistant-card.tourist { border-color: #fde68a; background: #fffbeb; }
                    .assistant-card h4 { margin: 0 0 1rem; font-size: 0.95rem; color: #0f172a; }
                    .assistant-card button {
                        width: 100%;
                        padding: 0.55rem;
                        border: none;
                        border-radius: 0.5rem;
                        color: white;
                        background: #2563eb;
                        cursor: pointer;
                        margin-bottom: 1rem;
                    }
                    .assistant-card.tourist button { background: #ca8a04; }
                    .assistant-result {
                        background: white;
                        border-radius: 0.5rem;
                        padding: 1rem;
                        font-size: 0.875rem;
                        color: #374151;
                        line-height: 1.6;
                    }
                    .estimate-row { display: flex; justify-content: space-between; padding: 0.25rem 0; }
                    .estimate-row.total { border-top: 1px solid #e5e7eb; margin-top: 0.4rem; padding-top: 0.6rem; color: #2563eb; }
                "#}
            </style>
            <Toast toast={toast.current()} on_close={toast.on_close()} />
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Reservar Servicio"}</h2>
                    <div class="section-rule"></div>
                    <p id={(*hint_id).clone()}>
                        {"Complete el formulario y reciba una cotización personalizada con asistencia de IA"}
                    </p>
                </div>

                <div class="reservation-grid">
                    <form class="reservation-form" {onsubmit} novalidate={true} aria-describedby={(*hint_id).clone()}>
                        <div class="form-grid">
                            <div class="form-field">
                                <label for="nombre">{"Nombre Completo *"}</label>
                                <input id="nombre" type="text" placeholder="Juan Pérez"
                                    value={form.value("nombre")}
                                    oninput={on_input("nombre")} onblur={on_blur("nombre")}
                                    aria-invalid={invalid("nombre")} aria-describedby="nombre-error" />
                                { field_error(&form, "nombre") }
                            </div>
                            <div class="form-field">
                                <label for="email">{"Email *"}</label>
                                <input id="email" type="email" placeholder="juan@example.com"
                                    value={form.value("email")}
                                    oninput={on_input("email")} onblur={on_blur("email")}
                                    aria-invalid={invalid("email")} aria-describedby="email-error" />
                                { field_error(&form, "email") }
                            </div>
                            <div class="form-field">
                                <label for="telefono">{"Teléfono *"}</label>
                                <input id="telefono" type="tel" placeholder="+51 999 999 999"
                                    value={form.value("telefono")}
                                    oninput={on_input("telefono")} onblur={on_blur("telefono")}
                                    aria-invalid={invalid("telefono")} aria-describedby="telefono-error" />
                                { field_error(&form, "telefono") }
                            </div>
                            <div class="form-field">
                                <label for="pasajeros">{"👥 Número de Pasajeros *"}</label>
                                <input id="pasajeros" type="number" min="1" max="50"
                                    value={form.value("pasajeros")}
                                    oninput={on_input("pasajeros")} onblur={on_blur("pasajeros")}
                                    aria-invalid={invalid("pasajeros")} aria-describedby="pasajeros-error" />
                                { field_error(&form, "pasajeros") }
                            </div>
                            <div class="form-field">
                                <label for="origen">{"📍 Origen *"}</label>
                                <input id="origen" type="text" placeholder="Lima"
                                    value={form.value("origen")}
                                    oninput={on_input("origen")} onblur={on_blur("origen")}
                                    aria-invalid={invalid("origen")} aria-describedby="origen-error" />
                                { field_error(&form, "origen") }
                            </div>
                            <div class="form-field">
                                <label for="destino">{"📍 Destino *"}</label>
                                <input id="destino" type="text" placeholder="Cusco"
                                    value={form.value("destino")}
                                    oninput={on_input("destino")} onblur={on_blur("destino")}
                                    aria-invalid={invalid("destino")} aria-describedby="destino-error" />
                                { field_error(&form, "destino") }
                            </div>
                            <div class="form-field wide">
                                <label for="fecha">{"📅 Fecha del Viaje *"}</label>
                                <input id="fecha" type="date"
                                    value={form.value("fecha")}
                                    oninput={on_input("fecha")} onblur={on_blur("fecha")}
                                    aria-invalid={invalid("fecha")} aria-describedby="fecha-error" />
                                { field_error(&form, "fecha") }
                            </div>
                        </div>

                        <div class="form-field">
                            <div class="comments-header">
                                <label for="comentarios">{"💬 Comentarios Adicionales"}</label>
                                <button type="button" class="ai-chip" onclick={on_requirements}
                                    disabled={busy(Assistant::Requirements)}>
                                    { if busy(Assistant::Requirements) { "Generando..." } else { "✨ Generar con IA" } }
                                </button>
                            </div>
                            <textarea id="comentarios" rows="4"
                                placeholder="Detalles adicionales sobre su viaje..."
                                value={form.value("comentarios")}
                                oninput={on_comments} onblur={on_blur("comentarios")} />
                            { field_error(&form, "comentarios") }
                        </div>

                        <button type="submit" class="submit-button" disabled={*loading}>
                            {submit_label}
                        </button>
                    </form>

                    <aside>
                        <div class="assistant-card">
                            <h4>{"📍 Estimador de Ruta IA"}</h4>
                            <button type="button" onclick={on_route} disabled={busy(Assistant::Route)}>
                                { if busy(Assistant::Route) { "Calculando..." } else { "✨ Calcular Ruta" } }
                            </button>
                            {
                                if let Some(estimate) = *route {
                                    html! {
                                        <div class="assistant-result" aria-live="polite">
                                            <div class="estimate-row">
                                                <span>{"Distancia:"}</span>
                                                <span>{format!("{} km", estimate.distance_km)}</span>
                                            </div>
                                            <div class="estimate-row">
                                                <span>{"🕒 Tiempo:"}</span>
                                                <span>{format!("{} hrs", estimate.eta_hours)}</span>
                                            </div>
                                            <div class="estimate-row total">
                                                <span>{"Tarifa Base:"}</span>
                                                <span>{format!("S/ {}", estimate.base_fare)}</span>
                                            </div>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>

                        <div class="assistant-card tourist">
                            <h4>{"✨ Planificador Turístico IA"}</h4>
                            <button type="button" onclick={on_tourist} disabled={busy(Assistant::Tourist)}>
                                { if busy(Assistant::Tourist) { "Buscando..." } else { "📍 Ver Destinos" } }
                            </button>
                            {
                                match &*tips {
                                    Some(text) => html! {
                                        <div class="assistant-result" aria-live="polite">{text}</div>
                                    },
                                    None => html! {},
                                }
                            }
                        </div>
                    </aside>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::form_validation::FormValidator;

    fn filled() -> FormValues {
        let mut values = initial_values();
        for (k, v) in [
            ("nombre", "María Quispe"),
            ("email", "maria@example.pe"),
            ("telefono", "+51 987 654 321"),
            ("origen", "Lima"),
            ("destino", "Cusco"),
            ("fecha", "2999-07-28"),
            ("pasajeros", "6"),
            ("comentarios", "Con parada en Nasca <script>x()</script>"),
        ] {
            values.insert(k.to_string(), v.to_string());
        }
        values
    }

    #[test]
    fn blank_form_is_rejected() {
        let mut form = FormValidator::new(initial_values(), reservation_rules());
        assert!(!form.validate_all());
        assert_eq!(form.error("nombre"), Some("Ingrese un nombre válido (solo letras, 2 a 50 caracteres)"));
        assert_eq!(form.error("origen"), Some("origen es requerido"));
        assert_eq!(form.error("destino"), Some("destino es requerido"));
        assert_eq!(form.error("pasajeros"), None);
        assert_eq!(form.error("comentarios"), None);
    }

    #[test]
    fn filled_form_passes() {
        let mut form = FormValidator::new(filled(), reservation_rules());
        assert!(form.validate_all());
    }

    #[test]
    fn past_travel_date_and_large_groups_fail() {
        let mut values = filled();
        values.insert("fecha".into(), "2000-01-01".into());
        values.insert("pasajeros".into(), "51".into());
        let mut form = FormValidator::new(values, reservation_rules());
        assert!(!form.validate_all());
        assert_eq!(form.error("fecha"), Some("Seleccione una fecha futura"));
        assert_eq!(form.error("pasajeros"), Some("Ingrese un número entero de pasajeros entre 1 y 50"));
    }

    #[test]
    fn one_letter_places_are_rejected() {
        let mut values = filled();
        values.insert("destino".into(), "C".into());
        let mut form = FormValidator::new(values, reservation_rules());
        assert!(!form.validate_all());
        assert_eq!(form.error("destino"), Some("destino no es válido"));
    }

    #[test]
    fn passenger_count_must_be_a_whole_number() {
        for raw in ["2.5", "1e1", "12.0", "-3", "abc"] {
            let mut values = filled();
            values.insert("pasajeros".into(), raw.into());
            let mut form = FormValidator::new(values, reservation_rules());
            assert!(!form.validate_all(), "accepted {:?}", raw);
            assert_eq!(
                form.error("pasajeros"),
                Some("Ingrese un número entero de pasajeros entre 1 y 50")
            );
        }

        let mut values = filled();
        values.insert("pasajeros".into(), " 12 ".into());
        let mut form = FormValidator::new(values.clone(), reservation_rules());
        assert!(form.validate_all());
        assert_eq!(request_from(&values).passengers, 12);
    }

    #[test]
    fn request_keeps_travel_date_and_sanitizes_text() {
        let request = request_from(&filled());
        assert_eq!(request.travel_date, "2999-07-28");
        assert_eq!(request.passengers, 6);
        assert_eq!(request.comments, "Con parada en Nasca");
        assert_eq!(request.name, "María Quispe");
    }

    #[test]
    fn passenger_count_defaults_to_one() {
        let mut values = initial_values();
        values.insert("pasajeros".into(), "".into());
        assert_eq!(passenger_count(&values), 1);
    }
}
