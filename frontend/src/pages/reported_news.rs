use yew::prelude::*;
use zetho_admin_shared::{
    confirm::ConfirmState,
    endpoints::NestedKind,
    filter::{filter_view, StatusFilter},
    models::ReportedNews,
    reports::ReportBundle,
    text::excerpt,
    ApiError, RecordId, ReportStatus,
};

use super::nested_reports::NestedModeration;
use crate::{
    api,
    components::{
        confirm_modal::ConfirmModal,
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        search_controls::{SearchControls, StatusOptions},
        subject_report_table::{RowAction, SubjectReportTable},
    },
    config::REPORTED_NEWS_PREVIEW_CHARS,
    hooks::{use_remote, RemoteState},
    i18n::{
        current::{common as common_text, reported_news as t},
        fill_one,
    },
    utils::{image_url, time_ago, toggle_expanded},
};

fn preview(item: &ReportedNews) -> String {
    if !item.content.trim().is_empty() {
        return excerpt(&item.content, REPORTED_NEWS_PREVIEW_CHARS);
    }
    item.latest_report()
        .map(|report| report.reason.clone())
        .filter(|reason| !reason.is_empty())
        .unwrap_or_else(|| t::NO_CONTENT.to_string())
}

#[derive(Properties, PartialEq)]
struct NewsReportCardProps {
    item: ReportedNews,
    expanded: bool,
    on_toggle: Callback<RecordId>,
    on_moderate: Callback<NestedModeration>,
}

#[function_component(NewsReportCard)]
fn news_report_card(props: &NewsReportCardProps) -> Html {
    let item = &props.item;
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };
    let on_action = {
        let on_moderate = props.on_moderate.clone();
        let parent = item.id.clone();
        Callback::from(move |(report, action): RowAction| {
            let moderation = NestedModeration::new(NestedKind::News, parent.clone(), &report, action);
            on_moderate.emit(moderation)
        })
    };
    let latest_by = item
        .latest_report()
        .map(|report| fill_one(t::LATEST_BY_TEMPLATE, &report.user_id))
        .unwrap_or_else(|| t::NO_REPORTERS.to_string());
    let heading = if item.heading.is_empty() { t::UNTITLED } else { item.heading.as_str() };
    let specialty = if item.specialty.is_empty() { t::GENERAL } else { item.specialty.as_str() };

    html! {
        <article
            class={classes!(
                "rounded-2xl",
                "bg-white",
                "p-5",
                "shadow-sm",
                props.expanded.then_some("ring-2 ring-indigo-200")
            )}
        >
            <div class="flex gap-4">
                if let Some(src) = image_url(&item.image_url) {
                    <img class="h-16 w-16 shrink-0 rounded-xl object-cover" {src} alt={t::IMAGE_ALT} />
                }
                <div class="min-w-0 flex-1">
                    <h3 class="truncate font-semibold text-slate-900">{ heading }</h3>
                    <div class="mt-1 flex flex-wrap items-center gap-3 text-xs text-slate-500">
                        <span class="rounded-full bg-indigo-50 px-2 py-0.5 text-indigo-700">{ specialty }</span>
                        <span>{ fill_one(t::REPORTS_TEMPLATE, item.reports.len()) }</span>
                        <span>{ time_ago(&item.created_at) }</span>
                    </div>
                </div>
            </div>
            <p class="mt-3 cursor-pointer text-sm text-slate-600" onclick={toggle.clone()}>
                { preview(item) }
            </p>
            <div class="mt-4 flex items-center justify-between">
                <span class="text-xs text-slate-500">{ latest_by }</span>
                <button
                    type="button"
                    class="rounded-lg border border-slate-200 px-3 py-1 text-xs font-semibold text-slate-600 hover:bg-slate-50"
                    onclick={toggle}
                >
                    { if props.expanded { common_text::HIDE } else { common_text::VIEW } }
                </button>
            </div>
            if props.expanded {
                <SubjectReportTable reports={item.reports.clone()} {on_action} />
            }
        </article>
    }
}

#[function_component(ReportedNewsPage)]
pub fn reported_news_page() -> Html {
    let news = use_remote(api::fetch_reported_news, t::LOAD_FAILED);
    let query = use_state(String::new);
    let status = use_state(StatusFilter::<ReportStatus>::default);
    let expanded = use_state(|| Option::<RecordId>::None);
    let confirm = use_state(ConfirmState::<NestedModeration>::default);
    let action_error = use_state(|| Option::<String>::None);

    let on_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_status = {
        let status = status.clone();
        Callback::from(move |value: String| {
            status.set(StatusFilter::<ReportStatus>::from_select(&value))
        })
    };
    let on_reset = {
        let query = query.clone();
        let status = status.clone();
        Callback::from(move |_: ()| {
            query.set(String::new());
            status.set(StatusFilter::All);
        })
    };
    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |id: RecordId| toggle_expanded(&expanded, &id))
    };
    let on_moderate = {
        let confirm = confirm.clone();
        Callback::from(move |moderation: NestedModeration| {
            confirm.set(ConfirmState::open(moderation))
        })
    };
    let on_cancel = {
        let confirm = confirm.clone();
        Callback::from(move |_: ()| confirm.set(ConfirmState::Closed))
    };
    let on_confirm = {
        let confirm = confirm.clone();
        let news = news.clone();
        let action_error = action_error.clone();
        Callback::from(move |_: ()| {
            let mut state = (*confirm).clone();
            let Some(moderation) = state.confirm() else {
                return;
            };
            confirm.set(state);
            let on_error = {
                let action_error = action_error.clone();
                Callback::from(move |_: ApiError| {
                    action_error.set(Some(common_text::ACTION_FAILED.to_string()))
                })
            };
            moderation.run(&news, on_error);
        })
    };
    let clear_error = {
        let action_error = action_error.clone();
        Callback::from(move |_: ()| action_error.set(None))
    };

    let body = match news.state() {
        RemoteState::Loading => html! {
            <LoadingSpinner size={SpinnerSize::Large} label={AttrValue::from(t::LOADING)} />
        },
        RemoteState::Failed(message) => html! {
            <ErrorBanner
                message={message.clone()}
                auto_dismiss={false}
                on_retry={news.reload.clone()}
            />
        },
        RemoteState::Loaded(items) => {
            let visible = filter_view(items, &query, &status);
            if visible.is_empty() {
                html! { <div class="rounded-2xl bg-white p-10 text-center text-slate-500">{ t::EMPTY }</div> }
            } else {
                html! {
                    <div class="grid gap-5 lg:grid-cols-2">
                        { for visible.into_iter().map(|item| {
                            let key = item.id.to_string();
                            let is_expanded = (*expanded).as_ref() == Some(&item.id);
                            html! {
                                <NewsReportCard
                                    key={key}
                                    {item}
                                    expanded={is_expanded}
                                    on_toggle={on_toggle.clone()}
                                    on_moderate={on_moderate.clone()}
                                />
                            }
                        }) }
                    </div>
                }
            }
        },
    };

    html! {
        <section class="space-y-6">
            <div class="flex flex-wrap items-end justify-between gap-4">
                <div>
                    <h2 class="text-2xl font-bold text-slate-900">{ t::TITLE }</h2>
                    <p class="text-sm text-slate-500">{ t::SUBTITLE }</p>
                </div>
                <SearchControls
                    query={(*query).clone()}
                    {on_query}
                    aria_label={t::SEARCH_ARIA}
                    status={StatusOptions::reports(&status, on_status)}
                    {on_reset}
                />
            </div>
            if let Some(message) = (*action_error).clone() {
                <ErrorBanner {message} on_close={clear_error} />
            }
            { body }
            <ConfirmModal
                copy={confirm.pending().map(NestedModeration::copy)}
                {on_confirm}
                {on_cancel}
            />
        </section>
    }
}
