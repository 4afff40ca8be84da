use gloo_timers::callback::Timeout;
use yew::{prelude::*, use_effect_with};

use crate::{config::TOAST_DURATION_MS, i18n::current::toast as t};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn success(text: impl Into<String>) -> Self {
        ToastMessage {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        ToastMessage {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
    pub on_close: Callback<()>,
}

/// Transient message in the corner; closes itself after a few seconds.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.message.clone(), move |message| {
            // Dropping the timeout cancels it, so a newer message restarts the clock.
            let timeout = message
                .as_ref()
                .map(|_| Timeout::new(TOAST_DURATION_MS, move || on_close.emit(())));
            move || drop(timeout)
        });
    }

    let Some(message) = props.message.as_ref() else {
        return Html::default();
    };

    let tone = match message.kind {
        ToastKind::Success => "border-emerald-200 bg-emerald-50 text-emerald-700",
        ToastKind::Error => "border-red-200 bg-red-50 text-red-700",
    };
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class={classes!(
                "fixed",
                "right-6",
                "top-6",
                "z-50",
                "flex",
                "items-center",
                "gap-3",
                "rounded-xl",
                "border",
                "px-4",
                "py-3",
                "text-sm",
                "font-medium",
                "shadow-lg",
                tone
            )}
            role="status"
            aria-live="polite"
        >
            <span>{ message.text.clone() }</span>
            <button type="button" class="text-lg leading-none" aria-label={t::CLOSE_ARIA} onclick={close}>
                {"×"}
            </button>
        </div>
    }
}
