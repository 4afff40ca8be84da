use yew::prelude::*;
use zetho_admin_shared::paging::PageWindow;

use crate::i18n::{current::pagination as t, fill_two};

#[derive(Properties, PartialEq)]
pub struct PageControlsProps {
    pub window: PageWindow,
    pub on_change: Callback<usize>,
}

const BUTTON_CLASSES: &str = "rounded-lg border border-slate-200 bg-white px-3 py-1.5 text-sm \
                              font-medium text-slate-700 hover:border-indigo-400 \
                              hover:text-indigo-600 disabled:cursor-not-allowed disabled:opacity-50";

/// Prev / "Page X of Y" / Next.
#[function_component(PageControls)]
pub fn page_controls(props: &PageControlsProps) -> Html {
    let window = props.window;
    let step = |delta: isize| {
        let on_change = props.on_change.clone();
        let target = window.page.saturating_add_signed(delta);
        Callback::from(move |_: MouseEvent| on_change.emit(target))
    };

    html! {
        <nav class="flex items-center gap-3" aria-label={t::ARIA_NAV}>
            <button
                type="button"
                class={BUTTON_CLASSES}
                disabled={!window.has_prev()}
                onclick={step(-1)}
            >
                { t::PREV }
            </button>
            <span class="text-sm text-slate-600" aria-live="polite">
                { fill_two(t::PAGE_OF_TEMPLATE, window.page, window.pages) }
            </span>
            <button
                type="button"
                class={BUTTON_CLASSES}
                disabled={!window.has_next()}
                onclick={step(1)}
            >
                { t::NEXT }
            </button>
        </nav>
    }
}
