use gloo_timers::callback::Timeout;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Politeness {
    Polite,
    Assertive,
}

impl Politeness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Politeness::Polite => "polite",
            Politeness::Assertive => "assertive",
        }
    }
}

/// Appends a short-lived live region so screen readers read `message` out.
pub fn announce_to_screen_reader(message: &str, politeness: Politeness) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let (Some(body), Ok(region)) = (document.body(), document.create_element("div")) else {
        return;
    };

    let _ = region.set_attribute("role", "status");
    let _ = region.set_attribute("aria-live", politeness.as_str());
    let _ = region.set_attribute("aria-atomic", "true");
    region.set_class_name("sr-only");
    region.set_text_content(Some(message));

    if body.append_child(&region).is_err() {
        log::warn!("Could not attach live region for announcement");
        return;
    }

    Timeout::new(config::ANNOUNCEMENT_CLEAR_MS, move || {
        region.remove();
    })
    .forget();
}

/// Locks page scrolling while an overlay (mobile menu) is open, compensating
/// for the scrollbar width so the layout doesn't jump.
pub fn toggle_body_scroll(disable: bool) {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else { return };
    let Some(body) = document.body() else { return };
    let style = body.style();

    if disable {
        let inner_width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        let client_width = document
            .document_element()
            .map(|el| el.client_width() as f64)
            .unwrap_or(inner_width);
        let scrollbar = (inner_width - client_width).max(0.0);
        let _ = style.set_property("overflow", "hidden");
        let _ = style.set_property("padding-right", &format!("{}px", scrollbar));
    } else {
        let _ = style.remove_property("overflow");
        let _ = style.remove_property("padding-right");
    }
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Scrolls the section with `id` into view, smooth unless reduced motion is requested.
/// Returns false when the section is not in the document.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn generate_aria_id(prefix: &str) -> String {
    let random = web_sys::js_sys::Math::random();
    format!("{}-{:x}", prefix, (random * 1e12) as u64)
}
