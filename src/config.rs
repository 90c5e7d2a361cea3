
#[cfg(debug_assertions)]
pub fn is_development() -> bool {
    true  // Dev overlays (responsive indicator) are rendered
}

#[cfg(not(debug_assertions))]
pub fn is_development() -> bool {
    false
}

/// Demo password for the admin gate. Override at build time with ADMIN_PASSWORD.
pub fn admin_password() -> &'static str {
    option_env!("ADMIN_PASSWORD").unwrap_or("admin123")
}

pub const COMPANY_NAME: &str = "Mis Dos Marías E.I.R.L.";
pub const COMPANY_SLOGAN: &str = "Tu viaje, nuestra pasión";
pub const COMPANY_ADDRESS: &str = "Av. Principal 123, Miraflores";
pub const COMPANY_CITY: &str = "Lima, Perú";
pub const COMPANY_PHONE: &str = "(01) 234-5678";
pub const COMPANY_WHATSAPP: &str = "+51 999 888 777";
pub const COMPANY_EMAIL: &str = "info@misdosmarias.com";
pub const RESERVATIONS_EMAIL: &str = "reservas@misdosmarias.com";

pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAVIGATION_SECTIONS: &[NavSection] = &[
    NavSection { id: "inicio", label: "Inicio" },
    NavSection { id: "nosotros", label: "Nosotros" },
    NavSection { id: "servicios", label: "Servicios" },
    NavSection { id: "flota", label: "Flota" },
    NavSection { id: "rutas", label: "Rutas" },
    NavSection { id: "reservar", label: "Reservar" },
    NavSection { id: "contacto", label: "Contacto" },
];

pub fn section_ids() -> Vec<String> {
    NAVIGATION_SECTIONS.iter().map(|s| s.id.to_string()).collect()
}

pub const SKIP_LINK_TARGET: &str = "main-content";

pub mod storage_keys {
    pub const RESERVATIONS: &str = "reservations";
    pub const ADMIN_TOKEN: &str = "admin_token";
    // Declared for parity with the persisted layout, nothing reads it yet.
    #[allow(dead_code)]
    pub const USER_PREFERENCES: &str = "user_preferences";
}

pub const RESIZE_DEBOUNCE_MS: u32 = 150;
pub const SCROLL_DEBOUNCE_MS: u32 = 50;
pub const SCROLL_SPY_OFFSET: f64 = 100.0;

pub const TOAST_DURATION_MS: u32 = 5_000;
pub const ANNOUNCEMENT_CLEAR_MS: u32 = 1_000;

pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const SUBMITTED_RESET_MS: u32 = 3_000;

pub const SUBMIT_RATE_LIMIT: usize = 3;
pub const SUBMIT_RATE_WINDOW_MS: i64 = 60_000;
