use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use zetho_admin_shared::{filter::StatusFilter, ReportStatus, TicketStatus};

use crate::i18n::current::common as common_text;

/// Status dropdown contents: `(value, label)` pairs after the "all" entry.
#[derive(Clone, PartialEq)]
pub struct StatusOptions {
    pub selected: &'static str,
    pub options: Vec<(&'static str, &'static str)>,
    pub on_change: Callback<String>,
}

impl StatusOptions {
    pub fn reports(filter: &StatusFilter<ReportStatus>, on_change: Callback<String>) -> Self {
        StatusOptions {
            selected: filter.select_value(),
            options: ReportStatus::ALL
                .iter()
                .map(|status| (status.as_str(), status.label()))
                .collect(),
            on_change,
        }
    }

    pub fn tickets(filter: &StatusFilter<TicketStatus>, on_change: Callback<String>) -> Self {
        StatusOptions {
            selected: filter.select_value(),
            options: TicketStatus::ALL
                .iter()
                .map(|status| (status.as_str(), status.label()))
                .collect(),
            on_change,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchControlsProps {
    pub query: String,
    pub on_query: Callback<String>,
    pub aria_label: AttrValue,
    #[prop_or(AttrValue::from(common_text::SEARCH_PLACEHOLDER))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub status: Option<StatusOptions>,
    /// Shows a reset button that clears both controls.
    #[prop_or_default]
    pub on_reset: Option<Callback<()>>,
}

#[function_component(SearchControls)]
pub fn search_controls(props: &SearchControlsProps) -> Html {
    let on_input = {
        let on_query = props.on_query.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_query.emit(input.value());
        })
    };

    let status_select = props.status.as_ref().map(|status| {
        let on_change = {
            let cb = status.on_change.clone();
            Callback::from(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                cb.emit(select.value());
            })
        };
        html! {
            <select
                class="rounded-lg border border-slate-200 bg-white px-3 py-2 text-sm"
                aria-label={common_text::STATUS_FILTER_ARIA}
                onchange={on_change}
            >
                <option value="all" selected={status.selected == "all"}>
                    { common_text::ALL_STATUSES }
                </option>
                { for status.options.iter().map(|(value, label)| html! {
                    <option value={*value} selected={status.selected == *value}>{ *label }</option>
                }) }
            </select>
        }
    });

    let reset_button = props.on_reset.clone().map(|on_reset| {
        let onclick = Callback::from(move |_: MouseEvent| on_reset.emit(()));
        html! {
            <button
                type="button"
                class="rounded-lg border border-slate-200 px-3 py-2 text-sm font-medium text-slate-600 hover:bg-slate-50"
                {onclick}
            >
                { common_text::RESET }
            </button>
        }
    });

    html! {
        <div class="flex flex-wrap items-center gap-3">
            <input
                type="search"
                class="min-w-[14rem] flex-1 rounded-lg border border-slate-200 px-3 py-2 text-sm focus:border-indigo-400 focus:outline-none"
                placeholder={props.placeholder.clone()}
                aria-label={props.aria_label.clone()}
                value={props.query.clone()}
                oninput={on_input}
            />
            { for status_select }
            { for reset_button }
        </div>
    }
}
