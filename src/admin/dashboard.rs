use chrono::{DateTime, NaiveDate};
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlInputElement, StorageEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{self, storage_keys};
use crate::services::reservations::{browser_store, Reservation};
use crate::services::storage::{session_storage, KeyValueStore};
use crate::Route;

const SESSION_MARKER: &str = "authenticated";

fn has_admin_session() -> bool {
    matches!(
        session_storage().get_item(storage_keys::ADMIN_TOKEN),
        Ok(Some(token)) if token == SESSION_MARKER
    )
}

fn passenger_total(reservations: &[Reservation]) -> u32 {
    reservations.iter().map(|r| r.details.passengers).sum()
}

/// Travel dates are stored as `YYYY-MM-DD`; older records carry RFC 3339 timestamps.
fn display_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Snapshot of the stored list; a failed read shows as an empty list plus an error.
fn load_reservations(
    reservations: &UseStateHandle<Vec<Reservation>>,
    error: &UseStateHandle<Option<String>>,
) {
    match browser_store().list() {
        Ok(list) => {
            reservations.set(list);
            error.set(None);
        }
        Err(e) => {
            warn!("Could not read reservations: {}", e);
            reservations.set(Vec::new());
            error.set(Some("No se pudieron leer las reservas guardadas".to_string()));
        }
    }
}

#[function_component]
pub fn AdminDashboard() -> Html {
    let authenticated = use_state(has_admin_session);
    let password = use_state(String::new);
    let reservations = use_state(Vec::<Reservation>::new);
    let error = use_state(|| None::<String>);
    let selected_id = use_state(|| None::<String>);

    {
        let reservations = reservations.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |authenticated: &bool| {
                let mut teardown: Option<(_, _)> = None;
                if *authenticated {
                    load_reservations(&reservations, &error);

                    let subscription = {
                        let reservations = reservations.clone();
                        browser_store()
                            .feed()
                            .subscribe(move |all| reservations.set(all.to_vec()))
                    };

                    // Writes from other tabs only show up as storage events
                    let on_storage = {
                        let error = error.clone();
                        Closure::wrap(Box::new(move |event: StorageEvent| {
                            let relevant = event
                                .key()
                                .map_or(true, |key| key == storage_keys::RESERVATIONS);
                            if !relevant {
                                return;
                            }
                            if let Err(e) = browser_store().refresh() {
                                warn!("Refresh after storage event failed: {}", e);
                                error.set(Some("No se pudieron leer las reservas guardadas".to_string()));
                            }
                        }) as Box<dyn FnMut(StorageEvent)>)
                    };
                    if let Some(window) = window() {
                        if window
                            .add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref())
                            .is_err()
                        {
                            warn!("Failed to register storage listener");
                        }
                    }
                    teardown = Some((subscription, on_storage));
                }

                move || {
                    if let Some((subscription, on_storage)) = teardown {
                        drop(subscription);
                        if let Some(window) = window() {
                            let _ = window.remove_event_listener_with_callback(
                                "storage",
                                on_storage.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            *authenticated,
        );
    }

    if !*authenticated {
        let on_password = {
            let password = password.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                password.set(input.value());
            })
        };

        let on_login = {
            let password = password.clone();
            let authenticated = authenticated.clone();
            let error = error.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                if *password != config::admin_password() {
                    warn!("Rejected admin login attempt");
                    error.set(Some("Contraseña incorrecta".to_string()));
                    password.set(String::new());
                    return;
                }
                if let Err(e) = session_storage().set_item(storage_keys::ADMIN_TOKEN, SESSION_MARKER) {
                    // Still let the user in; the session just won't survive a reload
                    warn!("Could not persist admin session: {}", e);
                }
                info!("Admin signed in");
                error.set(None);
                password.set(String::new());
                authenticated.set(true);
            })
        };

        return html! {
            <div class="admin-overlay">
                <style>{ADMIN_STYLES}</style>
                <div class="admin-login">
                    <div class="admin-login-header">
                        <h2>{"Panel de Administración"}</h2>
                        <Link<Route> to={Route::Home} classes="admin-close">{"✕"}</Link<Route>>
                    </div>
                    <form onsubmit={on_login}>
                        <label for="admin-password">{"Contraseña de Acceso"}</label>
                        <input
                            id="admin-password"
                            type="password"
                            placeholder="Ingrese contraseña"
                            value={(*password).clone()}
                            oninput={on_password}
                            autofocus={true}
                        />
                        {
                            if let Some(err) = (*error).as_ref() {
                                html! { <p class="admin-error" role="alert">{err}</p> }
                            } else {
                                html! {}
                            }
                        }
                        <button type="submit" class="admin-primary">{"Iniciar Sesión"}</button>
                        <p class="admin-hint">{"Demo: contraseña \"admin123\""}</p>
                    </form>
                </div>
            </div>
        };
    }

    let on_sign_out = {
        let authenticated = authenticated.clone();
        let selected_id = selected_id.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = session_storage().remove_item(storage_keys::ADMIN_TOKEN) {
                warn!("Could not clear admin session: {}", e);
            }
            info!("Admin signed out");
            selected_id.set(None);
            authenticated.set(false);
        })
    };

    let on_delete = {
        let selected_id = selected_id.clone();
        let error = error.clone();
        Callback::from(move |id: String| {
            let confirmed = window()
                .and_then(|w| w.confirm_with_message("¿Está seguro de eliminar esta reserva?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            match browser_store().delete(&id) {
                Ok(true) => {
                    if selected_id.as_deref() == Some(id.as_str()) {
                        selected_id.set(None);
                    }
                }
                Ok(false) => {
                    // Removed elsewhere; the store republished the list so the row goes away
                    selected_id.set(None);
                    error.set(Some("La reserva ya no existe".to_string()));
                }
                Err(e) => {
                    warn!("Failed to delete reservation {}: {}", id, e);
                    error.set(Some("No se pudo eliminar la reserva".to_string()));
                }
            }
        })
    };

    let selected = (*selected_id)
        .as_ref()
        .and_then(|id| reservations.iter().find(|r| &r.id == id));

    html! {
        <div class="admin-overlay">
            <style>{ADMIN_STYLES}</style>
            <div class="admin-panel">
                <div class="admin-header">
                    <div class="admin-header-row">
                        <div>
                            <h2>{"Panel de Administración"}</h2>
                            <p class="admin-subtitle">{"Gestión de Reservas en Tiempo Real"}</p>
                        </div>
                        <div class="admin-actions">
                            <button class="admin-ghost" onclick={on_sign_out}>{"Cerrar sesión"}</button>
                            <Link<Route> to={Route::Home} classes="admin-ghost">{"Volver al sitio"}</Link<Route>>
                        </div>
                    </div>
                    <div class="admin-stats">
                        <div class="admin-stat">
                            <p>{"Total Reservas"}</p>
                            <strong>{reservations.len()}</strong>
                        </div>
                        <div class="admin-stat">
                            <p>{"Pasajeros Totales"}</p>
                            <strong>{passenger_total(&reservations)}</strong>
                        </div>
                        <div class="admin-stat">
                            <p>{"Actualizaciones"}</p>
                            <strong class="small">{"En tiempo real"}</strong>
                        </div>
                    </div>
                </div>

                <div class="admin-content">
                    {
                        if let Some(err) = (*error).as_ref() {
                            html! { <div class="admin-error" role="alert">{err}</div> }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if reservations.is_empty() {
                            html! { <p class="admin-empty">{"No hay reservas registradas"}</p> }
                        } else {
                            html! {
                                <div class="admin-grid">
                                    <div class="admin-list">
                                        { for reservations.iter().map(|reservation| {
                                            let id = reservation.id.clone();
                                            let is_selected = selected_id.as_deref() == Some(id.as_str());
                                            let select = {
                                                let selected_id = selected_id.clone();
                                                let id = id.clone();
                                                Callback::from(move |_: MouseEvent| selected_id.set(Some(id.clone())))
                                            };
                                            let delete = {
                                                let on_delete = on_delete.clone();
                                                let id = id.clone();
                                                Callback::from(move |e: MouseEvent| {
                                                    e.stop_propagation();
                                                    on_delete.emit(id.clone());
                                                })
                                            };
                                            let details = &reservation.details;
                                            html! {
                                                <div
                                                    key={id.clone()}
                                                    class={classes!("admin-card", is_selected.then(|| "selected"))}
                                                    onclick={select}
                                                >
                                                    <div class="admin-card-head">
                                                        <div>
                                                            <h4>{&details.name}</h4>
                                                            <p>{&details.email}</p>
                                                        </div>
                                                        <button class="admin-delete" title="Eliminar" onclick={delete}>{"🗑"}</button>
                                                    </div>
                                                    <div class="admin-card-grid">
                                                        <span>{format!("📍 {}", details.origin)}</span>
                                                        <span>{format!("➜ {}", details.destination)}</span>
                                                        <span>{format!("📅 {}", display_date(&details.travel_date))}</span>
                                                        <span>{format!("👥 {} pasajeros", details.passengers)}</span>
                                                    </div>
                                                </div>
                                            }
                                        }) }
                                    </div>

                                    <div class="admin-detail">
                                        {
                                            match selected {
                                                Some(reservation) => {
                                                    let details = &reservation.details;
                                                    let delete = {
                                                        let on_delete = on_delete.clone();
                                                        let id = reservation.id.clone();
                                                        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                                                    };
                                                    html! {
                                                        <div>
                                                            <h3>{"Detalles de la Reserva"}</h3>
                                                            <dl>
                                                                <dt>{"Cliente"}</dt><dd>{&details.name}</dd>
                                                                <dt>{"Email"}</dt><dd>{&details.email}</dd>
                                                                <dt>{"Teléfono"}</dt><dd>{&details.phone}</dd>
                                                                <dt>{"Ruta"}</dt><dd>{format!("{} → {}", details.origin, details.destination)}</dd>
                                                                <dt>{"Fecha del viaje"}</dt><dd>{display_date(&details.travel_date)}</dd>
                                                                <dt>{"Pasajeros"}</dt><dd>{details.passengers}</dd>
                                                                <dt>{"Comentarios"}</dt>
                                                                <dd>{ if details.comments.is_empty() { "Sin comentarios".to_string() } else { details.comments.clone() } }</dd>
                                                                <dt>{"ID"}</dt><dd class="mono">{&reservation.id}</dd>
                                                            </dl>
                                                            <button class="admin-danger" onclick={delete}>{"Eliminar reserva"}</button>
                                                        </div>
                                                    }
                                                }
                                                None => html! {
                                                    <p class="admin-empty">{"Seleccione una reserva para ver los detalles"}</p>
                                                },
                                            }
                                        }
                                    </div>
                                </div>
                            }
                        }
                    }
                </div>
            </div>
        </div>
    }
}

const ADMIN_STYLES: &str = r#"
    body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; }
    .admin-overlay {
        min-height: 100vh;
        background: rgba(15, 23, 42, 0.95);
        display: flex;
        align-items: flex-start;
        justify-content: center;
        padding: 1rem;
        box-sizing: border-box;
    }
    .admin-login {
        background: white;
        border-radius: 1rem;
        padding: 2rem;
        max-width: 28rem;
        width: 100%;
        margin-top: 15vh;
    }
    .admin-login-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; }
    .admin-login-header h2 { margin: 0; color: #0f172a; }
    .admin-close { color: #6b7280; text-decoration: none; font-size: 1.25rem; }
    .admin-login label { display: block; font-size: 0.875rem; color: #374151; margin-bottom: 0.5rem; }
    .admin-login input {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem 1rem;
        border: 1px solid #d1d5db;
        border-radius: 0.5rem;
        margin-bottom: 1rem;
    }
    .admin-primary {
        width: 100%;
        padding: 0.75rem;
        border: none;
        border-radius: 0.5rem;
        background: #2563eb;
        color: white;
        cursor: pointer;
    }
    .admin-hint { font-size: 0.75rem; color: #6b7280; text-align: center; }
    .admin-error {
        color: #b91c1c;
        background: #fef2f2;
        border-radius: 0.5rem;
        padding: 0.75rem 1rem;
        margin: 0 0 1rem;
        font-size: 0.875rem;
    }
    .admin-panel { background: white; border-radius: 1rem; max-width: 80rem; width: 100%; overflow: hidden; }
    .admin-header { background: linear-gradient(90deg, #2563eb, #1d4ed8); color: white; padding: 1.5rem; }
    .admin-header h2 { margin: 0; }
    .admin-header-row { display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 1rem; }
    .admin-subtitle { color: #dbeafe; font-size: 0.875rem; margin: 0.25rem 0 0; }
    .admin-actions { display: flex; gap: 0.5rem; }
    .admin-ghost {
        background: rgba(255, 255, 255, 0.2);
        color: white;
        border: none;
        border-radius: 0.5rem;
        padding: 0.5rem 1rem;
        cursor: pointer;
        text-decoration: none;
        font-size: 0.875rem;
    }
    .admin-stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem; margin-top: 1.5rem; }
    .admin-stat { background: rgba(255, 255, 255, 0.1); border-radius: 0.5rem; padding: 1rem; }
    .admin-stat p { margin: 0; color: #dbeafe; font-size: 0.875rem; }
    .admin-stat strong { display: block; font-size: 1.5rem; margin-top: 0.25rem; }
    .admin-stat strong.small { font-size: 0.875rem; }
    .admin-content { padding: 1.5rem; }
    .admin-empty { text-align: center; color: #6b7280; padding: 3rem 0; }
    .admin-grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
    @media (min-width: 1024px) { .admin-grid { grid-template-columns: 1fr 1fr; } }
    .admin-list { max-height: 600px; overflow-y: auto; }
    .admin-card {
        border: 1px solid #e5e7eb;
        border-radius: 0.5rem;
        padding: 1rem;
        margin-bottom: 1rem;
        cursor: pointer;
    }
    .admin-card.selected { border-color: #2563eb; background: #eff6ff; }
    .admin-card-head { display: flex; justify-content: space-between; align-items: flex-start; }
    .admin-card h4 { margin: 0; color: #0f172a; }
    .admin-card-head p { margin: 0.2rem 0 0.75rem; color: #6b7280; font-size: 0.875rem; }
    .admin-card-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; font-size: 0.875rem; color: #4b5563; }
    .admin-delete { background: none; border: none; cursor: pointer; color: #dc2626; font-size: 1rem; }
    .admin-detail { background: #f8fafc; border-radius: 0.5rem; padding: 1.5rem; align-self: start; }
    .admin-detail h3 { margin-top: 0; color: #0f172a; }
    .admin-detail dt { font-size: 0.75rem; text-transform: uppercase; color: #6b7280; margin-top: 1rem; }
    .admin-detail dd { margin: 0.25rem 0 0; color: #0f172a; }
    .admin-detail .mono { font-family: monospace; font-size: 0.8rem; }
    .admin-danger {
        margin-top: 1.5rem;
        width: 100%;
        padding: 0.6rem;
        border: none;
        border-radius: 0.5rem;
        background: #dc2626;
        color: white;
        cursor: pointer;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::reservations::ReservationRequest;

    fn reservation(id: &str, passengers: u32) -> Reservation {
        Reservation {
            id: id.to_string(),
            details: ReservationRequest {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                phone: "987654321".into(),
                origin: "Lima".into(),
                destination: "Cusco".into(),
                travel_date: "2025-07-28".into(),
                passengers,
                comments: String::new(),
            },
        }
    }

    #[test]
    fn passenger_total_sums_every_record() {
        assert_eq!(passenger_total(&[]), 0);
        assert_eq!(passenger_total(&[reservation("1", 3), reservation("2", 12)]), 15);
    }

    #[test]
    fn display_date_formats_both_stored_shapes() {
        assert_eq!(display_date("2025-07-28"), "28/07/2025");
        assert_eq!(display_date("2025-01-05T14:30:00.000Z"), "05/01/2025");
        assert_eq!(display_date("mañana"), "mañana");
    }
}
