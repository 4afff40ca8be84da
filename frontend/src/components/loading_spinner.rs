use yew::prelude::*;

use crate::i18n::current::{common as common_text, loading_spinner as t};

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Medium => 36,
            SpinnerSize::Large => 52,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    /// Text next to the spinner; defaults to a generic loading label.
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());
    let label = props
        .label
        .clone()
        .unwrap_or_else(|| AttrValue::from(common_text::LOADING));

    html! {
        <div
            class={classes!("flex", "items-center", "justify-center", "gap-3", "p-6", "text-slate-500")}
            role="status"
            aria-live="polite"
            aria-busy="true"
            aria-label={t::ARIA_LABEL}
        >
            <div
                style={spinner_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-[3px]",
                    "border-slate-200",
                    "border-t-indigo-500",
                    "animate-spin"
                )}
            />
            <span class="text-sm">{ label }</span>
        </div>
    }
}

/// Grey placeholder shaped like a dashboard card.
#[function_component(SkeletonCard)]
pub fn skeleton_card() -> Html {
    html! {
        <div
            class={classes!("animate-pulse", "rounded-2xl", "bg-white", "p-5", "shadow-sm")}
            aria-hidden="true"
        >
            <div class="mb-4 h-10 w-10 rounded-xl bg-slate-200" />
            <div class="mb-2 h-3 w-24 rounded bg-slate-200" />
            <div class="h-6 w-16 rounded bg-slate-300" />
        </div>
    }
}
