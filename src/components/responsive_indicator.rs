use yew::prelude::*;

use crate::config;
use crate::hooks::responsive::{use_responsive, Breakpoint, DeviceType};

fn device_icon(device: DeviceType) -> &'static str {
    match device {
        DeviceType::Mobile => "📱",
        DeviceType::Tablet => "📲",
        DeviceType::Laptop => "💻",
        DeviceType::Desktop => "🖥️",
    }
}

/// Development overlay with the live breakpoint and viewport size.
#[function_component(ResponsiveIndicator)]
pub fn responsive_indicator() -> Html {
    let state = use_responsive();

    if !config::is_development() {
        return html! {};
    }

    let tone = if state.is_mobile() {
        "mobile"
    } else if state.is_tablet() {
        "tablet"
    } else if state.is_laptop() {
        "laptop"
    } else {
        "desktop"
    };

    html! {
        <div class="responsive-indicator" aria-hidden="true">
            <style>
                {r#"
                    .responsive-indicator {
                        position: fixed;
                        bottom: 1rem;
                        right: 1rem;
                        z-index: 9999;
                        pointer-events: none;
                        font-size: 0.75rem;
                        color: white;
                    }
                    .indicator-badge { padding: 0.75rem 1rem; border-radius: 0.5rem; }
                    .indicator-badge.mobile { background: #3b82f6; }
                    .indicator-badge.tablet { background: #22c55e; }
                    .indicator-badge.laptop { background: #a855f7; }
                    .indicator-badge.desktop { background: #f97316; }
                    .indicator-legend {
                        margin-top: 0.5rem;
                        background: rgba(0, 0, 0, 0.8);
                        padding: 0.5rem 0.75rem;
                        border-radius: 0.5rem;
                    }
                    .indicator-legend div { opacity: 0.6; }
                    .indicator-legend div.current { opacity: 1; font-weight: bold; color: #60a5fa; }
                "#}
            </style>
            <div class={classes!("indicator-badge", tone)}>
                <div>
                    {format!(
                        "{} {} • {}",
                        device_icon(state.device_type),
                        state.breakpoint.as_str().to_uppercase(),
                        state.device_type.as_str()
                    )}
                </div>
                <div>{format!("{}px × {}px", state.width, state.height)}</div>
            </div>
            <div class="indicator-legend">
                <div><strong>{"Breakpoints:"}</strong></div>
                { for Breakpoint::ALL.iter().map(|bp| html! {
                    <div class={classes!((*bp == state.breakpoint).then(|| "current"))}>
                        {format!("{}: {}", bp.as_str(), bp.range_label())}
                    </div>
                }) }
            </div>
        </div>
    }
}
