use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::utils::accessibility::{announce_to_screen_reader, Politeness};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn politeness(&self) -> Politeness {
        match self {
            ToastKind::Error | ToastKind::Warning => Politeness::Assertive,
            ToastKind::Success | ToastKind::Info => Politeness::Polite,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Warning => "toast-warning",
            ToastKind::Info => "toast-info",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✔",
            ToastKind::Error => "✖",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub toast: Option<ToastMessage>,
    #[prop_or(config::TOAST_DURATION_MS)]
    pub duration: u32,
    pub on_close: Callback<()>,
}

/// Announces the message when it appears and closes itself after `duration`
/// (0 keeps it open).
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_close = props.on_close.clone();
        let duration = props.duration;
        use_effect_with_deps(
            move |toast: &Option<ToastMessage>| {
                let timer = toast.as_ref().and_then(|toast| {
                    announce_to_screen_reader(&toast.message, toast.kind.politeness());
                    (duration > 0).then(|| Timeout::new(duration, move || on_close.emit(())))
                });
                move || drop(timer)
            },
            props.toast.clone(),
        );
    }

    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class={classes!("toast", toast.kind.class())}
            role="alert"
            aria-live={toast.kind.politeness().as_str()}
            aria-atomic="true"
        >
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        top: 5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 100;
                        max-width: 28rem;
                        width: calc(100% - 2rem);
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        border-top: 4px solid;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
                        color: #0f172a;
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast-success { background: #f0fdf4; border-color: #10b981; }
                    .toast-error { background: #fef2f2; border-color: #ef4444; }
                    .toast-warning { background: #fefce8; border-color: #f59e0b; }
                    .toast-info { background: #eff6ff; border-color: #3b82f6; }
                    .toast-icon { font-size: 1.25rem; }
                    .toast-message { flex: 1; margin: 0; }
                    .toast-close {
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #64748b;
                        font-size: 1.1rem;
                    }
                    @keyframes toastIn {
                        from { opacity: 0; transform: translate(-50%, -40px); }
                        to { opacity: 1; transform: translate(-50%, 0); }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .toast { animation: none; }
                    }
                "#}
            </style>
            <span class="toast-icon" aria-hidden="true">{toast.kind.icon()}</span>
            <p class="toast-message">{&toast.message}</p>
            <button class="toast-close" onclick={close} aria-label="Cerrar notificación">
                {"×"}
            </button>
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub struct UseToastHandle {
    state: UseStateHandle<Option<ToastMessage>>,
}

impl UseToastHandle {
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        self.state.set(Some(ToastMessage {
            message: message.into(),
            kind,
        }));
    }

    pub fn current(&self) -> Option<ToastMessage> {
        (*self.state).clone()
    }

    pub fn on_close(&self) -> Callback<()> {
        let state = self.state.clone();
        Callback::from(move |_| state.set(None))
    }
}

#[hook]
pub fn use_toast() -> UseToastHandle {
    UseToastHandle {
        state: use_state(|| None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_and_warnings_interrupt() {
        assert_eq!(ToastKind::Error.politeness(), Politeness::Assertive);
        assert_eq!(ToastKind::Warning.politeness(), Politeness::Assertive);
        assert_eq!(ToastKind::Success.politeness(), Politeness::Polite);
        assert_eq!(ToastKind::Info.politeness(), Politeness::Polite);
    }
}
