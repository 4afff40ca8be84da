use yew::prelude::*;
use zetho_admin_shared::{
    confirm::{ConfirmCopy, ConfirmState},
    filter::{filter_view, StatusFilter},
    models::PostReport,
    mutation::MutationOptions,
    reports::{group_post_reports, set_flat_report_status, PostReportGroup, ReportBundle},
    text::excerpt,
    ApiError, RecordId, ReportAction, ReportStatus,
};

use crate::{
    api,
    components::{
        confirm_modal::ConfirmModal,
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        report_actions::ReportActions,
        search_controls::{SearchControls, StatusOptions},
        status_badge::badge,
    },
    config::{MAX_REPORTER_BADGES, POST_PREVIEW_CHARS},
    hooks::{spawn_optimistic, use_remote, RemoteState},
    i18n::{
        current::{common as common_text, report_table as table, reported_posts as t},
        fill_one,
    },
    utils::{time_ago, toggle_expanded},
};

/// One Resolve/Dismiss click waiting for confirmation.
#[derive(Debug, Clone, PartialEq)]
struct Moderation {
    report: RecordId,
    reporter: RecordId,
    post: RecordId,
    action: ReportAction,
}

impl Moderation {
    fn copy(&self) -> ConfirmCopy {
        ConfirmCopy::for_report(self.action, &self.reporter, &format!("post {}", self.post))
    }
}

#[derive(Properties, PartialEq)]
struct PostGroupCardProps {
    group: PostReportGroup,
    expanded: bool,
    on_toggle: Callback<RecordId>,
    on_moderate: Callback<Moderation>,
}

#[function_component(PostGroupCard)]
fn post_group_card(props: &PostGroupCardProps) -> Html {
    let group = &props.group;
    let (reporters, hidden) = group.reporter_badges(MAX_REPORTER_BADGES);
    let filed = group
        .latest_report()
        .map(|report| time_ago(&report.created_at))
        .unwrap_or_default();

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let post_id = group.post_id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(post_id.clone()))
    };

    let rows = group.reports.iter().map(|report| {
        let actions = report.status.is_pending().then(|| {
            let on_moderate = props.on_moderate.clone();
            let report_id = report.id.clone();
            let reporter = report.reported_by.clone();
            let post = report.post_id.clone();
            let on_action = Callback::from(move |action: ReportAction| {
                on_moderate.emit(Moderation {
                    report: report_id.clone(),
                    reporter: reporter.clone(),
                    post: post.clone(),
                    action,
                });
            });
            html! { <ReportActions {on_action} /> }
        });
        let reason = if report.reason.is_empty() {
            common_text::NO_VALUE.to_string()
        } else {
            report.reason.clone()
        };

        html! {
            <tr key={report.id.to_string()} class="border-t border-slate-100">
                <td class="px-3 py-2">{ report.reported_by.to_string() }</td>
                <td class="px-3 py-2">{ reason }</td>
                <td class="px-3 py-2">{ badge(&report.status) }</td>
                <td class="px-3 py-2 text-slate-500">{ time_ago(&report.created_at) }</td>
                <td class="px-3 py-2">{ for actions }</td>
            </tr>
        }
    });

    html! {
        <article
            class={classes!(
                "rounded-2xl",
                "bg-white",
                "p-5",
                "shadow-sm",
                props.expanded.then_some("ring-2 ring-indigo-200")
            )}
            aria-expanded={props.expanded.to_string()}
        >
            <div class="flex items-start gap-4">
                <div
                    class="flex h-11 w-11 shrink-0 items-center justify-center rounded-full bg-indigo-100 font-bold text-indigo-700"
                    aria-hidden="true"
                >
                    { group.post_id.initials() }
                </div>
                <div class="min-w-0 flex-1 cursor-pointer" role="button" tabindex="0" onclick={toggle}>
                    <div class="flex items-center gap-2">
                        <span class="font-semibold text-slate-900">
                            { fill_one(t::POST_TEMPLATE, &group.post_id) }
                        </span>
                        { badge(&group.severity()) }
                    </div>
                    <p class="mt-1 truncate text-sm text-slate-600">
                        { excerpt(group.preview(), POST_PREVIEW_CHARS) }
                    </p>
                    <div class="mt-3 flex flex-wrap gap-2">
                        { for reporters.iter().map(|reporter| html! {
                            <span
                                key={reporter.to_string()}
                                class="rounded-full bg-slate-100 px-2.5 py-0.5 text-xs text-slate-600"
                            >
                                { fill_one(t::REPORTER_TEMPLATE, reporter) }
                            </span>
                        }) }
                        if hidden > 0 {
                            <span class="rounded-full bg-slate-100 px-2.5 py-0.5 text-xs text-slate-600">
                                { fill_one(t::MORE_TEMPLATE, hidden) }
                            </span>
                        }
                    </div>
                </div>
                <div class="shrink-0 text-right text-xs text-slate-500">
                    <p class="font-semibold text-slate-700">
                        { fill_one(t::REPORTS_TEMPLATE, group.reports.len()) }
                    </p>
                    <p>{ filed }</p>
                </div>
            </div>
            if props.expanded {
                <div class="mt-4 overflow-x-auto">
                    <table class="w-full text-left text-sm">
                        <thead class="text-xs uppercase text-slate-500">
                            <tr>
                                <th class="px-3 py-2">{ table::USER }</th>
                                <th class="px-3 py-2">{ table::REASON }</th>
                                <th class="px-3 py-2">{ table::STATUS }</th>
                                <th class="px-3 py-2">{ table::REPORTED_ON }</th>
                                <th class="px-3 py-2">{ table::ACTIONS }</th>
                            </tr>
                        </thead>
                        <tbody>{ for rows }</tbody>
                    </table>
                </div>
            }
        </article>
    }
}

#[function_component(ReportedPostsPage)]
pub fn reported_posts_page() -> Html {
    let reports = use_remote(api::fetch_reported_posts, t::LOAD_FAILED);
    let query = use_state(String::new);
    let status = use_state(StatusFilter::<ReportStatus>::default);
    let expanded = use_state(|| Option::<RecordId>::None);
    let confirm = use_state(ConfirmState::<Moderation>::default);
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
        Callback::from(move |post_id: RecordId| toggle_expanded(&expanded, &post_id))
    };
    let on_moderate = {
        let confirm = confirm.clone();
        Callback::from(move |moderation: Moderation| confirm.set(ConfirmState::open(moderation)))
    };
    let on_cancel = {
        let confirm = confirm.clone();
        Callback::from(move |_: ()| confirm.set(ConfirmState::Closed))
    };
    let on_confirm = {
        let confirm = confirm.clone();
        let reports = reports.clone();
        let action_error = action_error.clone();
        Callback::from(move |_: ()| {
            let mut state = (*confirm).clone();
            let Some(moderation) = state.confirm() else {
                return;
            };
            confirm.set(state);

            let report_id = moderation.report.clone();
            let target = moderation.action.target_status();
            let on_error = {
                let action_error = action_error.clone();
                Callback::from(move |_: ApiError| {
                    action_error.set(Some(common_text::ACTION_FAILED.to_string()))
                })
            };
            spawn_optimistic(
                &reports,
                MutationOptions::REFETCH,
                move |list: &mut Vec<PostReport>| set_flat_report_status(list, &report_id, target),
                move || async move {
                    api::moderate_post_report(&moderation.report, moderation.action).await
                },
                on_error,
            );
        })
    };
    let clear_error = {
        let action_error = action_error.clone();
        Callback::from(move |_: ()| action_error.set(None))
    };

    let body = match reports.state() {
        RemoteState::Loading => html! {
            <LoadingSpinner size={SpinnerSize::Large} label={AttrValue::from(t::LOADING)} />
        },
        RemoteState::Failed(message) => html! {
            <ErrorBanner
                message={message.clone()}
                auto_dismiss={false}
                on_retry={reports.reload.clone()}
            />
        },
        RemoteState::Loaded(list) => {
            let groups = filter_view(&group_post_reports(list.clone()), &query, &status);
            if groups.is_empty() {
                html! { <div class="rounded-2xl bg-white p-10 text-center text-slate-500">{ t::EMPTY }</div> }
            } else {
                html! {
                    <div class="space-y-4">
                        { for groups.into_iter().map(|group| {
                            let key = group.post_id.to_string();
                            let is_expanded = (*expanded).as_ref() == Some(&group.post_id);
                            html! {
                                <PostGroupCard
                                    key={key}
                                    group={group}
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
            <h2 class="text-2xl font-bold text-slate-900">{ t::TITLE }</h2>
            if let Some(message) = (*action_error).clone() {
                <ErrorBanner {message} on_close={clear_error} />
            }
            <SearchControls
                query={(*query).clone()}
                {on_query}
                aria_label={t::SEARCH_ARIA}
                status={StatusOptions::reports(&status, on_status)}
                {on_reset}
            />
            { body }
            <ConfirmModal
                copy={confirm.pending().map(Moderation::copy)}
                {on_confirm}
                {on_cancel}
            />
        </section>
    }
}
