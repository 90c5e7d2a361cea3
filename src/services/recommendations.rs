//! Canned "assistant" answers for the landing page. Every answer is table
//! driven and the async variants only add latency so the UI can show
//! its loading states.

use std::collections::HashMap;

use gloo_timers::future::TimeoutFuture;

/// Exact-match lookup with a fallback computed from the missed key.
pub struct KeyedTable<V> {
    entries: HashMap<&'static str, V>,
    fallback: fn(&str) -> V,
}

impl<V: Clone> KeyedTable<V> {
    pub fn new(entries: impl IntoIterator<Item = (&'static str, V)>, fallback: fn(&str) -> V) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            fallback,
        }
    }

    pub fn lookup(&self, key: &str) -> V {
        match self.entries.get(key) {
            Some(value) => value.clone(),
            None => (self.fallback)(key),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEstimate {
    pub distance_km: u32,
    pub eta_hours: u32,
    /// Soles.
    pub base_fare: u32,
}

const fn estimate(distance_km: u32, eta_hours: u32, base_fare: u32) -> RouteEstimate {
    RouteEstimate { distance_km, eta_hours, base_fare }
}

fn route_table() -> KeyedTable<RouteEstimate> {
    KeyedTable::new(
        [
            ("Lima-Cusco", estimate(1100, 20, 450)),
            ("Lima-Arequipa", estimate(1010, 16, 420)),
            ("Cusco-Arequipa", estimate(520, 10, 280)),
            ("Lima-Trujillo", estimate(560, 9, 300)),
        ],
        |_| estimate(300, 6, 200),
    )
}

/// Keyed on the literal "origin-destination" pair, so direction matters.
pub fn route_estimate(origin: &str, destination: &str) -> RouteEstimate {
    route_table().lookup(&format!("{}-{}", origin, destination))
}

fn tourist_table() -> KeyedTable<String> {
    KeyedTable::new(
        [
            (
                "Cusco",
                "🏛️ Plaza de Armas: Centro histórico con arquitectura colonial. 🏔️ Machu Picchu: Ciudadela inca imperdible (tour de día completo). 🍴 Mercado San Pedro: Experiencia gastronómica local auténtica.".to_string(),
            ),
            (
                "Arequipa",
                "⛪ Monasterio de Santa Catalina: Ciudadela religiosa colonial. 🏔️ Cañón del Colca: Observación de cóndores andinos. 🍽️ Picanterías tradicionales: Prueba el rocoto relleno.".to_string(),
            ),
            (
                "Lima",
                "🏛️ Centro Histórico: Plaza Mayor y Catedral. 🌊 Miraflores: Malecón con vista al Pacífico. 🍴 Circuito gastronómico: Restaurantes de cocina peruana.".to_string(),
            ),
        ],
        |destination| {
            format!(
                "📍 Puntos de interés locales en {}. 🎯 Actividades culturales y turísticas. 🍴 Gastronomía regional típica.",
                destination
            )
        },
    )
}

pub fn tourist_recommendations(destination: &str) -> String {
    tourist_table().lookup(destination)
}

fn service_table() -> KeyedTable<String> {
    KeyedTable::new(
        [
            (
                "Transporte de Personal",
                "Soluciones corporativas eficientes para movilizar a su equipo con puntualidad y seguridad garantizadas. Optimice la productividad de su empresa con nuestro servicio premium.".to_string(),
            ),
            (
                "Turismo y Excursiones",
                "Descubra destinos increíbles con comodidad y guías expertos. Experiencias memorables diseñadas para explorar lo mejor de cada región con total tranquilidad.".to_string(),
            ),
            (
                "Transporte Escolar",
                "Servicio seguro y confiable para el traslado diario de estudiantes. Conductores certificados y unidades equipadas con sistemas de seguridad de última generación.".to_string(),
            ),
            (
                "Eventos Especiales",
                "Movilización impecable para bodas, conferencias y celebraciones. Coordinación perfecta que garantiza la llegada puntual de todos sus invitados con elegancia.".to_string(),
            ),
        ],
        |_| "Servicio de transporte profesional adaptado a sus necesidades.".to_string(),
    )
}

pub fn service_description(service_name: &str) -> String {
    service_table().lookup(service_name)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LuggageType {
    Light,
    Medium,
    Heavy,
}

impl LuggageType {
    pub const ALL: [LuggageType; 3] = [LuggageType::Light, LuggageType::Medium, LuggageType::Heavy];

    /// Form value used by the advisor's select.
    pub fn as_str(&self) -> &'static str {
        match self {
            LuggageType::Light => "ligero",
            LuggageType::Medium => "medio",
            LuggageType::Heavy => "pesado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LuggageType::Light => "Ligero (bolsos pequeños)",
            LuggageType::Medium => "Medio (maletas)",
            LuggageType::Heavy => "Pesado (equipaje grande)",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vehicle {
    Sedan,
    Minivan,
    Bus,
}

impl Vehicle {
    pub const ALL: [Vehicle; 3] = [Vehicle::Sedan, Vehicle::Minivan, Vehicle::Bus];

    pub fn name(&self) -> &'static str {
        match self {
            Vehicle::Sedan => "Sedán Ejecutivo",
            Vehicle::Minivan => "Minivan Premium",
            Vehicle::Bus => "Bus Turístico",
        }
    }

    pub fn capacity(&self) -> &'static str {
        match self {
            Vehicle::Sedan => "1-4 pasajeros",
            Vehicle::Minivan => "5-15 pasajeros",
            Vehicle::Bus => "16-50 pasajeros",
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Vehicle::Sedan => &["Aire acondicionado", "Asientos de cuero", "Wifi", "USB"],
            Vehicle::Minivan => &["Amplio espacio", "Climatizador", "TV/DVD", "Portaequipajes"],
            Vehicle::Bus => &["Asientos reclinables", "Baño", "Pantallas", "Aire acondicionado"],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VehicleRecommendation {
    pub vehicle: Vehicle,
    pub reason: &'static str,
}

pub fn vehicle_recommendation(passengers: u32, luggage: LuggageType) -> VehicleRecommendation {
    let (vehicle, reason) = match (passengers, luggage) {
        (0..=4, LuggageType::Light) => (
            Vehicle::Sedan,
            "Ideal para grupos pequeños con equipaje ligero. Viaje elegante y eficiente.",
        ),
        (0..=4, _) => (
            Vehicle::Minivan,
            "Perfecto para grupos pequeños con equipaje considerable. Mayor capacidad de carga.",
        ),
        (5..=15, _) => (
            Vehicle::Minivan,
            "Óptimo para grupos medianos. Combina comodidad con espacio suficiente.",
        ),
        _ => (
            Vehicle::Bus,
            "La mejor opción para grupos grandes. Máximo confort en viajes largos.",
        ),
    };
    VehicleRecommendation { vehicle, reason }
}

pub fn requirements_text(origin: &str, destination: &str, passengers: u32) -> String {
    format!(
        "Solicito cotización para servicio de transporte desde {} hacia {} para {} pasajero(s). \
         Requiero un servicio profesional que garantice puntualidad, comodidad y seguridad durante todo el trayecto. \
         Agradeceré incluir en la cotización los detalles del vehículo asignado, horarios disponibles y condiciones del servicio. \
         Quedo atento a su respuesta. Saludos cordiales.",
        origin, destination, passengers
    )
}

const ROUTE_LATENCY_MS: u32 = 1_000;
const TOURIST_LATENCY_MS: u32 = 1_200;
const REQUIREMENTS_LATENCY_MS: u32 = 1_000;
const VEHICLE_LATENCY_MS: u32 = 700;
const SERVICE_LATENCY_MIN_MS: u32 = 800;
const SERVICE_LATENCY_JITTER_MS: f64 = 400.0;

pub async fn estimate_route(origin: String, destination: String) -> RouteEstimate {
    TimeoutFuture::new(ROUTE_LATENCY_MS).await;
    route_estimate(&origin, &destination)
}

pub async fn plan_tourist_visit(destination: String) -> String {
    TimeoutFuture::new(TOURIST_LATENCY_MS).await;
    tourist_recommendations(&destination)
}

pub async fn draft_requirements(origin: String, destination: String, passengers: u32) -> String {
    TimeoutFuture::new(REQUIREMENTS_LATENCY_MS).await;
    requirements_text(&origin, &destination, passengers)
}

pub async fn advise_vehicle(passengers: u32, luggage: LuggageType) -> VehicleRecommendation {
    TimeoutFuture::new(VEHICLE_LATENCY_MS).await;
    vehicle_recommendation(passengers, luggage)
}

pub async fn describe_service(service_name: String) -> String {
    let jitter = (web_sys::js_sys::Math::random() * SERVICE_LATENCY_JITTER_MS) as u32;
    TimeoutFuture::new(SERVICE_LATENCY_MIN_MS + jitter).await;
    service_description(&service_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes() {
        assert_eq!(route_estimate("Lima", "Cusco"), estimate(1100, 20, 450));
        assert_eq!(route_estimate("Lima", "Trujillo").base_fare, 300);
        assert_eq!(route_estimate("Cusco", "Arequipa").eta_hours, 10);
    }

    #[test]
    fn unknown_or_reversed_route_uses_default() {
        let default = estimate(300, 6, 200);
        assert_eq!(route_estimate("Piura", "Tumbes"), default);
        assert_eq!(route_estimate("Cusco", "Lima"), default);
        assert_eq!(route_estimate("", ""), default);
    }

    #[test]
    fn tourist_fallback_mentions_destination() {
        assert!(tourist_recommendations("Cusco").contains("Machu Picchu"));
        assert!(tourist_recommendations("Huaraz").contains("Puntos de interés locales en Huaraz"));
    }

    #[test]
    fn service_descriptions() {
        assert!(service_description("Transporte Escolar").contains("estudiantes"));
        assert_eq!(
            service_description("Mudanzas"),
            "Servicio de transporte profesional adaptado a sus necesidades."
        );
    }

    #[test]
    fn vehicle_thresholds() {
        assert_eq!(vehicle_recommendation(4, LuggageType::Light).vehicle, Vehicle::Sedan);
        assert_eq!(vehicle_recommendation(4, LuggageType::Heavy).vehicle, Vehicle::Minivan);
        assert_eq!(vehicle_recommendation(2, LuggageType::Medium).vehicle, Vehicle::Minivan);
        assert_eq!(vehicle_recommendation(5, LuggageType::Light).vehicle, Vehicle::Minivan);
        assert_eq!(vehicle_recommendation(15, LuggageType::Light).vehicle, Vehicle::Minivan);
        assert_eq!(vehicle_recommendation(16, LuggageType::Light).vehicle, Vehicle::Bus);
        assert_eq!(vehicle_recommendation(50, LuggageType::Heavy).vehicle, Vehicle::Bus);
    }

    #[test]
    fn small_group_reasons_differ_by_luggage() {
        let light = vehicle_recommendation(3, LuggageType::Light);
        let heavy = vehicle_recommendation(3, LuggageType::Heavy);
        let medium_group = vehicle_recommendation(10, LuggageType::Heavy);
        assert_ne!(light.reason, heavy.reason);
        assert_ne!(heavy.reason, medium_group.reason);
    }

    #[test]
    fn luggage_form_values() {
        assert_eq!(LuggageType::parse("pesado"), Some(LuggageType::Heavy));
        assert_eq!(LuggageType::parse("enorme"), None);
        for luggage in LuggageType::ALL {
            assert_eq!(LuggageType::parse(luggage.as_str()), Some(luggage));
        }
    }

    #[test]
    fn requirements_text_names_the_trip() {
        let text = requirements_text("Lima", "Ica", 6);
        assert!(text.starts_with("Solicito cotización para servicio de transporte desde Lima hacia Ica para 6 pasajero(s)."));
        assert!(text.ends_with("Saludos cordiales."));
    }

    #[test]
    fn keyed_table_fallback_sees_key() {
        let table = KeyedTable::new([("a", 1usize)], |key| key.len() * 10);
        assert_eq!(table.lookup("a"), 1);
        assert_eq!(table.lookup("abc"), 30);
    }
}
