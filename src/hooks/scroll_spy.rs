use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::utils::debounce::Debouncer;

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Where the page is scrolled to and where each section sits.
pub trait SectionMeasure {
    fn scroll_y(&self) -> f64;
    /// `None` when the section is not in the document.
    fn bounds(&self, id: &str) -> Option<SectionBounds>;
}

pub struct DomMeasure;

impl SectionMeasure for DomMeasure {
    fn scroll_y(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        let element = window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionBounds {
            top: element.offset_top() as f64,
            height: element.offset_height() as f64,
        })
    }
}

/// First section in list order containing `scroll_y + offset`.
pub fn locate_section<'a, M>(ids: &'a [String], measure: &M, offset: f64) -> Option<&'a str>
where
    M: SectionMeasure + ?Sized,
{
    let position = measure.scroll_y() + offset;
    ids.iter()
        .find(|id| {
            measure
                .bounds(id)
                .map_or(false, |bounds| bounds.contains(position))
        })
        .map(|id| id.as_str())
}

/// Active-section tracker. Starts on the first id and keeps the last match
/// when the scroll position is outside every section.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSpy {
    ids: Vec<String>,
    offset: f64,
    active: Option<String>,
}

impl ScrollSpy {
    pub fn new(ids: Vec<String>, offset: f64) -> Self {
        let active = ids.first().cloned();
        Self { ids, offset, active }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Re-measures; returns true when the active section changed.
    pub fn refresh<M: SectionMeasure + ?Sized>(&mut self, measure: &M) -> bool {
        let Some(found) = locate_section(&self.ids, measure, self.offset) else {
            return false;
        };
        if self.active.as_deref() == Some(found) {
            return false;
        }
        self.active = Some(found.to_string());
        true
    }
}

#[hook]
pub fn use_scroll_spy(ids: Vec<String>, offset: f64) -> Option<String> {
    let active = use_state_eq(|| ids.first().cloned());

    {
        let active = active.clone();
        use_effect_with_deps(
            move |(ids, offset)| {
                let spy = Rc::new(RefCell::new(ScrollSpy::new(ids.clone(), *offset)));
                let debouncer = Debouncer::new(config::SCROLL_DEBOUNCE_MS);

                let measure_now = {
                    let spy = spy.clone();
                    let active = active.clone();
                    move || {
                        let mut spy = spy.borrow_mut();
                        if spy.refresh(&DomMeasure) {
                            log::debug!("Active section: {:?}", spy.active());
                            active.set(spy.active().map(str::to_string));
                        }
                    }
                };

                let on_scroll = {
                    let debouncer = debouncer.clone();
                    let measure_now = measure_now.clone();
                    Closure::wrap(Box::new(move || {
                        debouncer.call(measure_now.clone());
                    }) as Box<dyn FnMut()>)
                };

                let window = window();
                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Failed to register scroll listener");
                    }
                }

                // Initial check
                active.set(spy.borrow().active().map(str::to_string));
                measure_now();

                move || {
                    debouncer.cancel();
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (ids, offset),
        );
    }

    (*active).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    struct FixedLayout {
        scroll: Cell<f64>,
        sections: HashMap<&'static str, SectionBounds>,
    }

    impl FixedLayout {
        fn new(sections: &[(&'static str, f64, f64)]) -> Self {
            Self {
                scroll: Cell::new(0.0),
                sections: sections
                    .iter()
                    .map(|(id, top, height)| (*id, SectionBounds { top: *top, height: *height }))
                    .collect(),
            }
        }

        fn scroll_to(&self, y: f64) {
            self.scroll.set(y);
        }
    }

    impl SectionMeasure for FixedLayout {
        fn scroll_y(&self) -> f64 {
            self.scroll.get()
        }

        fn bounds(&self, id: &str) -> Option<SectionBounds> {
            self.sections.get(id).copied()
        }
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn starts_on_first_id_before_measuring() {
        let spy = ScrollSpy::new(ids(&["a", "b"]), 100.0);
        assert_eq!(spy.active(), Some("a"));
    }

    #[test]
    fn empty_list_has_no_active_section() {
        let mut spy = ScrollSpy::new(Vec::new(), 100.0);
        let layout = FixedLayout::new(&[]);
        assert!(!spy.refresh(&layout));
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn tracks_section_under_scroll_position() {
        let layout = FixedLayout::new(&[("a", 0.0, 100.0), ("b", 100.0, 150.0)]);
        let mut spy = ScrollSpy::new(ids(&["a", "b"]), 0.0);

        layout.scroll_to(50.0);
        assert!(!spy.refresh(&layout));
        assert_eq!(spy.active(), Some("a"));

        layout.scroll_to(150.0);
        assert!(spy.refresh(&layout));
        assert_eq!(spy.active(), Some("b"));
    }

    #[test]
    fn past_every_section_keeps_last_match() {
        let layout = FixedLayout::new(&[("a", 0.0, 100.0), ("b", 100.0, 150.0)]);
        let mut spy = ScrollSpy::new(ids(&["a", "b"]), 0.0);

        layout.scroll_to(150.0);
        spy.refresh(&layout);
        layout.scroll_to(9999.0);
        assert!(!spy.refresh(&layout));
        assert_eq!(spy.active(), Some("b"));
    }

    #[test]
    fn offset_shifts_probe_point() {
        let layout = FixedLayout::new(&[("a", 0.0, 100.0), ("b", 100.0, 150.0)]);
        let mut spy = ScrollSpy::new(ids(&["a", "b"]), 100.0);

        layout.scroll_to(0.0);
        assert!(spy.refresh(&layout));
        assert_eq!(spy.active(), Some("b"));
    }

    #[test]
    fn first_match_wins_for_overlapping_sections() {
        let layout = FixedLayout::new(&[("wide", 0.0, 500.0), ("inner", 200.0, 50.0)]);
        let wide_first = ids(&["wide", "inner"]);
        assert_eq!(locate_section(&wide_first, &layout, 210.0), Some("wide"));

        let inner_first = ids(&["inner", "wide"]);
        assert_eq!(locate_section(&inner_first, &layout, 210.0), Some("inner"));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let layout = FixedLayout::new(&[("b", 0.0, 100.0)]);
        let list = ids(&["ghost", "b"]);
        assert_eq!(locate_section(&list, &layout, 10.0), Some("b"));
    }

    #[test]
    fn bottom_edge_is_exclusive() {
        let bounds = SectionBounds { top: 100.0, height: 50.0 };
        assert!(bounds.contains(100.0));
        assert!(bounds.contains(149.9));
        assert!(!bounds.contains(150.0));
    }
}
