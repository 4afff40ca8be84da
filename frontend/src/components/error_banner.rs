use yew::{prelude::*, use_effect_with};
use yew_hooks::prelude::use_timeout;

use crate::{
    config::TOAST_DURATION_MS,
    i18n::current::{common as common_text, error_banner as t},
};

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    /// Shows a retry button next to the message.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    /// Hide after the toast duration. Load failures keep this off.
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(
            move || dismiss.emit(()),
            if props.auto_dismiss { TOAST_DURATION_MS } else { 0 },
        )
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (*is_open, props.auto_dismiss, props.message.clone()),
            move |(visible, auto_dismiss, _message)| {
                if *auto_dismiss && *visible {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| dismiss.emit(()))
    };

    let retry_button = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_| on_retry.emit(()));
        html! {
            <button
                type="button"
                class={classes!(
                    "rounded-lg",
                    "border",
                    "border-red-300",
                    "px-3",
                    "py-1",
                    "text-xs",
                    "font-semibold",
                    "hover:bg-red-100"
                )}
                {onclick}
            >
                { common_text::RETRY }
            </button>
        }
    });

    html! {
        <div
            class={classes!(
                "error-banner",
                "flex",
                "items-start",
                "gap-3",
                "rounded-xl",
                "border",
                "border-red-200",
                "bg-red-50",
                "px-4",
                "py-3",
                "text-sm",
                "text-red-700",
                "shadow-sm",
                "w-full"
            )}
            role="alert"
            aria-live="assertive"
        >
            <span class="text-lg" aria-hidden="true">{"⚠️"}</span>
            <div class="flex-1 space-y-1">
                <p class="font-semibold">{ t::TITLE }</p>
                <p>{ props.message.clone() }</p>
            </div>
            { for retry_button }
            <button
                type="button"
                class={classes!(
                    "inline-flex",
                    "h-7",
                    "w-7",
                    "items-center",
                    "justify-center",
                    "rounded-full",
                    "text-lg",
                    "hover:bg-red-100"
                )}
                aria-label={t::CLOSE_ARIA}
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
