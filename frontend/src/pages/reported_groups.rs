use yew::prelude::*;
use zetho_admin_shared::{
    classify::Severity,
    confirm::ConfirmState,
    endpoints::NestedKind,
    filter::{filter_view, StatusFilter},
    models::ReportedGroup,
    reports::ReportBundle,
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
        status_badge::badge,
        subject_report_table::{RowAction, SubjectReportTable},
    },
    hooks::{use_remote, RemoteState},
    i18n::{
        current::{common as common_text, reported_groups as t},
        fill_one,
    },
    utils::toggle_expanded,
};

#[derive(Properties, PartialEq)]
struct GroupReportCardProps {
    group: ReportedGroup,
    expanded: bool,
    on_toggle: Callback<RecordId>,
    on_moderate: Callback<NestedModeration>,
}

#[function_component(GroupReportCard)]
fn group_report_card(props: &GroupReportCardProps) -> Html {
    let group = &props.group;
    let count = group.effective_report_count();
    let reason = group
        .latest_report()
        .map(|report| report.reason.clone())
        .filter(|reason| !reason.is_empty())
        .unwrap_or_else(|| t::NO_REASON.to_string());

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = group.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };
    let on_action = {
        let on_moderate = props.on_moderate.clone();
        let parent = group.id.clone();
        Callback::from(move |(report, action): RowAction| {
            let moderation = NestedModeration::new(NestedKind::Groups, parent.clone(), &report, action);
            on_moderate.emit(moderation)
        })
    };

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
            <div class="flex items-center gap-4">
                <div
                    class="flex h-12 w-12 shrink-0 items-center justify-center rounded-xl bg-gradient-to-br from-indigo-500 to-purple-500 font-bold text-white"
                    aria-hidden="true"
                >
                    { group.initials() }
                </div>
                <div class="min-w-0 flex-1">
                    <div class="flex items-center gap-2">
                        <h3 class="truncate font-semibold text-slate-900">{ group.display_name() }</h3>
                        { badge(&Severity::from_report_count(count)) }
                    </div>
                    <p class="text-xs text-slate-500">{ fill_one(t::REPORTS_TEMPLATE, count) }</p>
                </div>
                <button
                    type="button"
                    class="rounded-lg border border-slate-200 px-3 py-1 text-xs font-semibold text-slate-600 hover:bg-slate-50"
                    aria-expanded={props.expanded.to_string()}
                    onclick={toggle}
                >
                    { if props.expanded { common_text::HIDE } else { common_text::VIEW } }
                </button>
            </div>
            <p class="mt-3 text-sm text-slate-600">{ reason }</p>
            if props.expanded {
                <SubjectReportTable reports={group.reports.clone()} show_status={false} {on_action} />
            }
        </article>
    }
}

#[function_component(ReportedGroupsPage)]
pub fn reported_groups_page() -> Html {
    let groups = use_remote(api::fetch_reported_groups, t::LOAD_FAILED);
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
        let groups = groups.clone();
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
            moderation.run(&groups, on_error);
        })
    };
    let clear_error = {
        let action_error = action_error.clone();
        Callback::from(move |_: ()| action_error.set(None))
    };

    let body = match groups.state() {
        RemoteState::Loading => html! {
            <LoadingSpinner size={SpinnerSize::Large} label={AttrValue::from(t::LOADING)} />
        },
        RemoteState::Failed(message) => html! {
            <ErrorBanner
                message={message.clone()}
                auto_dismiss={false}
                on_retry={groups.reload.clone()}
            />
        },
        RemoteState::Loaded(items) => {
            let visible = filter_view(items, &query, &status);
            if visible.is_empty() {
                html! { <div class="rounded-2xl bg-white p-10 text-center text-slate-500">{ t::EMPTY }</div> }
            } else {
                html! {
                    <div class="grid gap-5 md:grid-cols-2 xl:grid-cols-3">
                        { for visible.into_iter().map(|group| {
                            let key = group.id.to_string();
                            let is_expanded = (*expanded).as_ref() == Some(&group.id);
                            html! {
                                <GroupReportCard
                                    key={key}
                                    {group}
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
