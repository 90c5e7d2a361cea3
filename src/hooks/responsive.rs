use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::config;
use crate::utils::debounce::Debouncer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub fn from_width(width: u32) -> Self {
        match width {
            w if w < 480 => Breakpoint::Xs,
            w if w < 640 => Breakpoint::Sm,
            w if w < 768 => Breakpoint::Md,
            w if w < 1024 => Breakpoint::Lg,
            w if w < 1280 => Breakpoint::Xl,
            _ => Breakpoint::Xxl,
        }
    }

    /// Lower bound of the band, taken from the same table as `from_width`.
    pub fn min_width(&self) -> u32 {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 480,
            Breakpoint::Md => 640,
            Breakpoint::Lg => 768,
            Breakpoint::Xl => 1024,
            Breakpoint::Xxl => 1280,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// Human readable pixel range, e.g. "640-767px".
    pub fn range_label(&self) -> String {
        let next = Breakpoint::ALL
            .iter()
            .find(|b| b.min_width() > self.min_width());
        match next {
            Some(next) => format!("{}-{}px", self.min_width(), next.min_width() - 1),
            None => format!("{}+px", self.min_width()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceType {
    Mobile,
    Tablet,
    Laptop,
    Desktop,
}

impl DeviceType {
    pub fn from_width(width: u32) -> Self {
        match width {
            w if w < 768 => DeviceType::Mobile,
            w if w < 1024 => DeviceType::Tablet,
            w if w < 1440 => DeviceType::Laptop,
            _ => DeviceType::Desktop,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
            DeviceType::Laptop => "laptop",
            DeviceType::Desktop => "desktop",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResponsiveState {
    pub width: u32,
    pub height: u32,
    pub breakpoint: Breakpoint,
    pub device_type: DeviceType,
}

impl ResponsiveState {
    pub fn classify(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            breakpoint: Breakpoint::from_width(width),
            device_type: DeviceType::from_width(width),
        }
    }

    /// Used when no window is available (prerender, tests).
    pub fn fallback() -> Self {
        Self {
            width: 1024,
            height: 768,
            breakpoint: Breakpoint::Lg,
            device_type: DeviceType::Laptop,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.device_type == DeviceType::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.device_type == DeviceType::Tablet
    }

    pub fn is_laptop(&self) -> bool {
        self.device_type == DeviceType::Laptop
    }

    pub fn is_desktop(&self) -> bool {
        self.device_type == DeviceType::Desktop
    }
}

fn read_viewport() -> Option<ResponsiveState> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(ResponsiveState::classify(
        width.max(0.0) as u32,
        height.max(0.0) as u32,
    ))
}

#[hook]
pub fn use_responsive() -> ResponsiveState {
    let state = use_state_eq(|| read_viewport().unwrap_or_else(ResponsiveState::fallback));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let debouncer = Debouncer::new(config::RESIZE_DEBOUNCE_MS);

                let on_resize = {
                    let debouncer = debouncer.clone();
                    let state = state.clone();
                    Closure::wrap(Box::new(move || {
                        let state = state.clone();
                        debouncer.call(move || {
                            if let Some(next) = read_viewport() {
                                state.set(next);
                            }
                        });
                    }) as Box<dyn FnMut()>)
                };

                let window = window();
                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Failed to register resize listener");
                    }
                }

                // Viewport may have changed between first render and mount
                if let Some(current) = read_viewport() {
                    state.set(current);
                }

                move || {
                    debouncer.cancel();
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            on_resize.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *state
}

#[hook]
pub fn use_is_mobile() -> bool {
    use_responsive().is_mobile()
}

#[hook]
pub fn use_is_tablet() -> bool {
    use_responsive().is_tablet()
}

/// True when the viewport is at least as wide as `min`.
#[hook]
pub fn use_breakpoint(min: Breakpoint) -> bool {
    use_responsive().width >= min.min_width()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_edges_of_mobile_and_tablet() {
        let at_767 = ResponsiveState::classify(767, 900);
        assert_eq!(at_767.breakpoint, Breakpoint::Md);
        assert_eq!(at_767.device_type, DeviceType::Mobile);

        let at_768 = ResponsiveState::classify(768, 900);
        assert_eq!(at_768.breakpoint, Breakpoint::Lg);
        assert_eq!(at_768.device_type, DeviceType::Tablet);
    }

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(0), Breakpoint::Xs);
        assert_eq!(Breakpoint::from_width(479), Breakpoint::Xs);
        assert_eq!(Breakpoint::from_width(480), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(640), Breakpoint::Md);
        assert_eq!(Breakpoint::from_width(1023), Breakpoint::Lg);
        assert_eq!(Breakpoint::from_width(1024), Breakpoint::Xl);
        assert_eq!(Breakpoint::from_width(1280), Breakpoint::Xxl);
        assert_eq!(Breakpoint::from_width(u32::MAX), Breakpoint::Xxl);
    }

    #[test]
    fn device_thresholds() {
        assert_eq!(DeviceType::from_width(1023), DeviceType::Tablet);
        assert_eq!(DeviceType::from_width(1024), DeviceType::Laptop);
        assert_eq!(DeviceType::from_width(1439), DeviceType::Laptop);
        assert_eq!(DeviceType::from_width(1440), DeviceType::Desktop);
    }

    #[test]
    fn exactly_one_device_flag_for_every_width() {
        for width in (0..3000).step_by(7) {
            let state = ResponsiveState::classify(width, 800);
            let flags = [
                state.is_mobile(),
                state.is_tablet(),
                state.is_laptop(),
                state.is_desktop(),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "width {}", width);
            assert!(width >= state.breakpoint.min_width());
        }
    }

    #[test]
    fn min_width_round_trips_through_from_width() {
        for bp in Breakpoint::ALL {
            assert_eq!(Breakpoint::from_width(bp.min_width()), bp);
        }
    }

    #[test]
    fn fallback_is_laptop_lg() {
        let state = ResponsiveState::fallback();
        assert_eq!((state.width, state.height), (1024, 768));
        assert_eq!(state.breakpoint, Breakpoint::Lg);
        assert!(state.is_laptop());
    }

    #[test]
    fn range_labels() {
        assert_eq!(Breakpoint::Md.range_label(), "640-767px");
        assert_eq!(Breakpoint::Xxl.range_label(), "1280+px");
        assert_eq!(Breakpoint::Xxl.as_str(), "2xl");
    }
}
