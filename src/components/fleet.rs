use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::responsive::{use_breakpoint, use_is_tablet, Breakpoint};
use crate::services::recommendations::{advise_vehicle, LuggageType, Vehicle, VehicleRecommendation};

const MAX_PASSENGERS: u32 = 50;

fn vehicle_image(vehicle: Vehicle) -> &'static str {
    match vehicle {
        Vehicle::Sedan => "/assets/fleet-sedan.jpg",
        Vehicle::Minivan => "/assets/fleet-minivan.jpg",
        Vehicle::Bus => "/assets/fleet-bus.jpg",
    }
}

fn vehicle_icon(vehicle: Vehicle) -> &'static str {
    match vehicle {
        Vehicle::Sedan => "🚗",
        Vehicle::Minivan | Vehicle::Bus => "🚌",
    }
}

/// Clamps the advisor's passenger input to 1..=50.
fn parse_passengers(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .map(|n| n.clamp(1, MAX_PASSENGERS))
        .unwrap_or(1)
}

#[function_component(Fleet)]
pub fn fleet() -> Html {
    let passengers = use_state(|| 4u32);
    let luggage = use_state(|| LuggageType::Light);
    let advising = use_state(|| false);
    let recommendation = use_state(|| None::<VehicleRecommendation>);
    let three_columns = use_breakpoint(Breakpoint::Xl);
    let two_columns = use_is_tablet();

    let on_passengers = {
        let passengers = passengers.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            passengers.set(parse_passengers(&input.value()));
        })
    };

    let on_luggage = {
        let luggage = luggage.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(parsed) = LuggageType::parse(&select.value()) {
                luggage.set(parsed);
            }
        })
    };

    let on_advise = {
        let passengers = passengers.clone();
        let luggage = luggage.clone();
        let advising = advising.clone();
        let recommendation = recommendation.clone();
        Callback::from(move |_: MouseEvent| {
            advising.set(true);
            let (count, kind) = (*passengers, *luggage);
            let advising = advising.clone();
            let recommendation = recommendation.clone();
            spawn_local(async move {
                recommendation.set(Some(advise_vehicle(count, kind).await));
                advising.set(false);
            });
        })
    };

    html! {
        <section id="flota" class="section fleet">
            <style>
                {r#"
                    .fleet { background: #ffffff; }
                    .advisor {
                        background: linear-gradient(90deg, #faf5ff, #fdf2f8);
                        border: 2px solid #e9d5ff;
                        border-radius: 1rem;
                        padding: 2rem;
                        margin-bottom: 3rem;
                    }
                    .advisor h3 { margin-top: 0; color: #0f172a; }
                    .advisor-controls {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                        align-items: end;
                        margin-bottom: 1.5rem;
                    }
                    .advisor label { display: block; font-size: 0.875rem; color: #374151; margin-bottom: 0.4rem; }
                    .advisor input, .advisor select {
                        width: 100%;
                        padding: 0.55rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid #d1d5db;
                        box-sizing: border-box;
                    }
                    .advisor button {
                        width: 100%;
                        padding: 0.6rem 1.5rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: linear-gradient(90deg, #9333ea, #db2777);
                        color: white;
                        cursor: pointer;
                    }
                    .advisor button:disabled { opacity: 0.5; cursor: wait; }
                    .advice {
                        display: flex;
                        gap: 1rem;
                        background: white;
                        border: 2px solid #d8b4fe;
                        border-radius: 0.5rem;
                        padding: 1.5rem;
                    }
                    .advice-icon { font-size: 1.75rem; }
                    .advice h4 { margin: 0 0 0.5rem; color: #0f172a; }
                    .advice p { margin: 0; color: #4b5563; font-size: 0.875rem; }
                    .vehicle-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
                    .vehicle-grid.two { grid-template-columns: repeat(2, 1fr); }
                    .vehicle-grid.three { grid-template-columns: repeat(3, 1fr); }
                    .vehicle-card {
                        border-radius: 0.75rem;
                        overflow: hidden;
                        box-shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
                        transition: transform 0.2s;
                    }
                    .vehicle-card:hover { transform: translateY(-10px); }
                    .vehicle-card img { width: 100%; height: 12rem; object-fit: cover; display: block; }
                    .vehicle-body { padding: 1.5rem; }
                    .vehicle-body h4 { margin: 0 0 0.5rem; color: #0f172a; }
                    .vehicle-capacity { color: #ca8a04; margin-bottom: 1rem; }
                    .vehicle-body ul { list-style: none; padding: 0; margin: 0; }
                    .vehicle-body li { font-size: 0.875rem; color: #4b5563; padding: 0.2rem 0; }
                    .vehicle-body li::before { content: "› "; color: #2563eb; }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Nuestra Flota"}</h2>
                    <div class="section-rule"></div>
                    <p>{"Vehículos modernos y bien mantenidos para garantizar su comodidad y seguridad"}</p>
                </div>

                <div class="advisor">
                    <h3>{"✨ Asesor de Flota IA"}</h3>
                    <div class="advisor-controls">
                        <div>
                            <label for="advisor-passengers">{"👥 Número de Pasajeros"}</label>
                            <input
                                id="advisor-passengers"
                                type="number"
                                min="1"
                                max="50"
                                value={passengers.to_string()}
                                oninput={on_passengers}
                            />
                        </div>
                        <div>
                            <label for="advisor-luggage">{"🧳 Tipo de Equipaje"}</label>
                            <select id="advisor-luggage" onchange={on_luggage}>
                                { for LuggageType::ALL.iter().map(|kind| html! {
                                    <option value={kind.as_str()} selected={*kind == *luggage}>{kind.label()}</option>
                                }) }
                            </select>
                        </div>
                        <div>
                            <button onclick={on_advise} disabled={*advising}>
                                { if *advising { "Analizando..." } else { "Obtener Recomendación ›" } }
                            </button>
                        </div>
                    </div>
                    {
                        match *recommendation {
                            Some(advice) => html! {
                                <div class="advice" aria-live="polite">
                                    <div class="advice-icon" aria-hidden="true">{vehicle_icon(advice.vehicle)}</div>
                                    <div>
                                        <h4>{format!("Recomendación: {}", advice.vehicle.name())}</h4>
                                        <p>{advice.reason}</p>
                                    </div>
                                </div>
                            },
                            None => html! {},
                        }
                    }
                </div>

                <div class={classes!(
                    "vehicle-grid",
                    three_columns.then(|| "three"),
                    (two_columns && !three_columns).then(|| "two")
                )}>
                    { for Vehicle::ALL.iter().map(|vehicle| html! {
                        <article class="vehicle-card" key={vehicle.name()}>
                            <img src={vehicle_image(*vehicle)} alt={vehicle.name()} loading="lazy" />
                            <div class="vehicle-body">
                                <h4>{vehicle.name()}</h4>
                                <p class="vehicle-capacity">{vehicle.capacity()}</p>
                                <ul>
                                    { for vehicle.features().iter().map(|feature| html! { <li>{*feature}</li> }) }
                                </ul>
                            </div>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passenger_input_is_clamped() {
        assert_eq!(parse_passengers("12"), 12);
        assert_eq!(parse_passengers("0"), 1);
        assert_eq!(parse_passengers("120"), 50);
        assert_eq!(parse_passengers(""), 1);
        assert_eq!(parse_passengers("-3"), 1);
    }
}
