use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use zetho_admin_shared::{
    classify::Priority,
    filter::{filter_view, StatusFilter, TicketStats},
    models::{Ticket, TicketReply, TicketUpdate},
    mutation::MutationOptions,
    ApiError, RecordId, TicketStatus,
};

use crate::{
    api,
    components::{
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        search_controls::{SearchControls, StatusOptions},
        stats_card::StatsCard,
        status_badge::badge,
    },
    hooks::{spawn_optimistic, use_remote, RemoteState},
    i18n::{
        current::{common as common_text, help_support as t},
        fill_one,
    },
    utils::{calendar_date, time_ago, toggle_expanded},
};

/// What the respond modal sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Response {
    ReplyOnly,
    WithStatus(TicketStatus),
}

fn priority_bar(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "bg-red-500",
        Priority::Medium => "bg-amber-400",
        Priority::Low => "bg-emerald-400",
    }
}

fn query_label(ticket: &Ticket) -> &str {
    if ticket.query_type.is_empty() {
        t::GENERAL_QUERY
    } else {
        &ticket.query_type
    }
}

#[derive(Properties, PartialEq)]
struct RespondModalProps {
    ticket: Ticket,
    on_submit: Callback<(String, Response)>,
    on_cancel: Callback<()>,
}

#[function_component(RespondModal)]
fn respond_modal(props: &RespondModalProps) -> Html {
    let reply = use_state(String::new);

    let on_input = {
        let reply = reply.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            reply.set(area.value());
        })
    };
    let submit = |response: Response| {
        let reply = reply.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            on_submit.emit(((*reply).clone(), response));
            reply.set(String::new());
        })
    };
    let on_cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let reply_empty = reply.trim().is_empty();

    html! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/40 p-4"
            role="dialog"
            aria-modal="true"
            aria-labelledby="respond-modal-title"
        >
            <div class="w-full max-w-lg rounded-2xl bg-white p-6 shadow-xl">
                <h2 id="respond-modal-title" class="mb-1 text-lg font-semibold text-slate-900">
                    { fill_one(t::MODAL_TITLE_TEMPLATE, &props.ticket.id) }
                </h2>
                <p class="mb-4 text-sm text-slate-500">{ props.ticket.message.clone() }</p>
                <textarea
                    class="h-32 w-full rounded-lg border border-slate-200 p-3 text-sm focus:border-indigo-400 focus:outline-none"
                    placeholder={t::REPLY_PLACEHOLDER}
                    value={(*reply).clone()}
                    oninput={on_input}
                />
                <div class="mt-4 flex flex-wrap justify-end gap-3">
                    <button
                        type="button"
                        class="rounded-lg border border-slate-200 px-4 py-2 text-sm font-medium text-slate-700 hover:bg-slate-50"
                        onclick={on_cancel}
                    >
                        { common_text::CANCEL }
                    </button>
                    <button
                        type="button"
                        class="rounded-lg border border-indigo-200 px-4 py-2 text-sm font-semibold text-indigo-700 hover:bg-indigo-50 disabled:opacity-50"
                        disabled={reply_empty}
                        onclick={submit(Response::ReplyOnly)}
                    >
                        { t::SEND_REPLY }
                    </button>
                    <button
                        type="button"
                        class="rounded-lg bg-amber-500 px-4 py-2 text-sm font-semibold text-white hover:bg-amber-600"
                        onclick={submit(Response::WithStatus(TicketStatus::InProgress))}
                    >
                        { t::SEND_AND_PROGRESS }
                    </button>
                    <button
                        type="button"
                        class="rounded-lg bg-emerald-600 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-700"
                        onclick={submit(Response::WithStatus(TicketStatus::Resolved))}
                    >
                        { t::SEND_AND_RESOLVE }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TicketCardProps {
    ticket: Ticket,
    expanded: bool,
    on_toggle: Callback<RecordId>,
    on_respond: Callback<Ticket>,
}

#[function_component(TicketCard)]
fn ticket_card(props: &TicketCardProps) -> Html {
    let ticket = &props.ticket;
    let priority = Priority::classify(&ticket.query_type);

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = ticket.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };
    let respond = {
        let on_respond = props.on_respond.clone();
        let ticket = ticket.clone();
        Callback::from(move |_: MouseEvent| on_respond.emit(ticket.clone()))
    };
    let detail = |label: &'static str, value: String| {
        html! {
            <div class="flex gap-3 py-1 text-sm">
                <dt class="w-28 shrink-0 text-slate-500">{ label }</dt>
                <dd class="text-slate-800">{ value }</dd>
            </div>
        }
    };

    html! {
        <article class="relative overflow-hidden rounded-2xl bg-white p-5 pl-7 shadow-sm">
            <span
                class={classes!("absolute", "inset-y-0", "left-0", "w-1.5", priority_bar(priority))}
                aria-hidden="true"
            />
            <div class="flex flex-wrap items-start justify-between gap-3">
                <div class="min-w-0">
                    <h3 class="font-semibold text-slate-900">{ fill_one(t::TICKET_TEMPLATE, &ticket.id) }</h3>
                    <p class="text-xs text-slate-500">
                        { fill_one(t::USER_TEMPLATE, &ticket.user_id) }
                        { " · " }
                        { fill_one(t::QUERY_TEMPLATE, query_label(ticket)) }
                    </p>
                </div>
                <div class="flex items-center gap-2">
                    { badge(&priority) }
                    { badge(&ticket.status) }
                </div>
            </div>
            <p class="mt-3 line-clamp-2 text-sm text-slate-600">{ ticket.message.clone() }</p>
            <div class="mt-4 flex items-center justify-between">
                <span class="text-xs text-slate-400">{ time_ago(&ticket.created_at) }</span>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="rounded-lg border border-slate-200 px-3 py-1 text-xs font-semibold text-slate-600 hover:bg-slate-50"
                        aria-expanded={props.expanded.to_string()}
                        onclick={toggle}
                    >
                        { if props.expanded { t::COLLAPSE } else { t::EXPAND } }
                    </button>
                    if ticket.status != TicketStatus::Resolved {
                        <button
                            type="button"
                            class="rounded-lg bg-indigo-600 px-3 py-1 text-xs font-semibold text-white hover:bg-indigo-700"
                            onclick={respond}
                        >
                            { t::RESPOND }
                        </button>
                    }
                </div>
            </div>
            if props.expanded {
                <dl class="mt-4 border-t border-slate-100 pt-3">
                    { detail(t::FIELD_TICKET_ID, ticket.id.to_string()) }
                    { detail(t::FIELD_USER_ID, ticket.user_id.to_string()) }
                    { detail(t::FIELD_QUERY_TYPE, query_label(ticket).to_string()) }
                    { detail(t::FIELD_STATUS, ticket.status.label().to_string()) }
                    { detail(t::FIELD_PRIORITY, priority.to_string()) }
                    { detail(t::FIELD_CREATED_AT, calendar_date(&ticket.created_at)) }
                    { detail(t::FIELD_MESSAGE, ticket.message.clone()) }
                    if !ticket.reply.is_empty() {
                        { detail(t::FIELD_REPLY, ticket.reply.clone()) }
                    }
                </dl>
            }
        </article>
    }
}

#[function_component(HelpSupportPage)]
pub fn help_support_page() -> Html {
    let tickets = use_remote(api::fetch_tickets, t::LOAD_FAILED);
    let query = use_state(String::new);
    let status = use_state(StatusFilter::<TicketStatus>::default);
    let expanded = use_state(|| Option::<RecordId>::None);
    let responding = use_state(|| Option::<Ticket>::None);
    let action_error = use_state(|| Option::<String>::None);

    let on_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_status = {
        let status = status.clone();
        Callback::from(move |value: String| {
            status.set(StatusFilter::<TicketStatus>::from_select(&value))
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
    let on_respond = {
        let responding = responding.clone();
        Callback::from(move |ticket: Ticket| responding.set(Some(ticket)))
    };
    let on_cancel = {
        let responding = responding.clone();
        Callback::from(move |_: ()| responding.set(None))
    };
    let on_submit = {
        let tickets = tickets.clone();
        let responding = responding.clone();
        let expanded = expanded.clone();
        let action_error = action_error.clone();
        Callback::from(move |(reply, response): (String, Response)| {
            let Some(ticket) = (*responding).clone() else {
                return;
            };
            responding.set(None);
            expanded.set(None);

            let on_error = {
                let action_error = action_error.clone();
                Callback::from(move |_: ApiError| {
                    action_error.set(Some(common_text::ACTION_FAILED.to_string()))
                })
            };
            let id = ticket.id;
            match response {
                Response::WithStatus(next) => {
                    let update = TicketUpdate {
                        status: next,
                        reply,
                    };
                    let local = update.clone();
                    let local_id = id.clone();
                    spawn_optimistic(
                        &tickets,
                        MutationOptions::LOCAL,
                        move |list: &mut Vec<Ticket>| local.apply_to(list, &local_id),
                        move || async move { api::update_ticket(&id, &update).await },
                        on_error,
                    );
                },
                Response::ReplyOnly => {
                    let body = TicketReply {
                        reply: reply.clone(),
                    };
                    let local_id = id.clone();
                    spawn_optimistic(
                        &tickets,
                        MutationOptions::LOCAL,
                        move |list: &mut Vec<Ticket>| {
                            match list.iter_mut().find(|ticket| ticket.id == local_id) {
                                Some(ticket) => {
                                    ticket.reply = reply;
                                    true
                                },
                                None => false,
                            }
                        },
                        move || async move { api::reply_ticket(&id, &body).await },
                        on_error,
                    );
                },
            }
        })
    };
    let clear_error = {
        let action_error = action_error.clone();
        Callback::from(move |_: ()| action_error.set(None))
    };

    let (stats_row, body) = match tickets.state() {
        RemoteState::Loading => (
            Html::default(),
            html! { <LoadingSpinner size={SpinnerSize::Large} label={AttrValue::from(t::LOADING)} /> },
        ),
        RemoteState::Failed(message) => (
            Html::default(),
            html! {
                <ErrorBanner
                    message={message.clone()}
                    auto_dismiss={false}
                    on_retry={tickets.reload.clone()}
                />
            },
        ),
        RemoteState::Loaded(list) => {
            let stats = TicketStats::from_tickets(list);
            let stats_row = html! {
                <div class="grid gap-5 sm:grid-cols-2 xl:grid-cols-4">
                    <StatsCard icon="🎫" label={t::STAT_TOTAL} value={stats.total as u64} />
                    <StatsCard icon="⏳" label={t::STAT_PENDING} value={stats.pending as u64} />
                    <StatsCard icon="🔧" label={t::STAT_IN_PROGRESS} value={stats.in_progress as u64} />
                    <StatsCard icon="✅" label={t::STAT_RESOLVED} value={stats.resolved as u64} />
                </div>
            };
            let visible = filter_view(list, &query, &status);
            let body = if visible.is_empty() {
                html! { <div class="rounded-2xl bg-white p-10 text-center text-slate-500">{ t::EMPTY }</div> }
            } else {
                html! {
                    <div class="space-y-4">
                        { for visible.into_iter().map(|ticket| {
                            let key = ticket.id.to_string();
                            let is_expanded = (*expanded).as_ref() == Some(&ticket.id);
                            html! {
                                <TicketCard
                                    key={key}
                                    {ticket}
                                    expanded={is_expanded}
                                    on_toggle={on_toggle.clone()}
                                    on_respond={on_respond.clone()}
                                />
                            }
                        }) }
                    </div>
                }
            };
            (stats_row, body)
        },
    };

    html! {
        <section class="space-y-6">
            <h2 class="text-2xl font-bold text-slate-900">{ t::TITLE }</h2>
            { stats_row }
            if let Some(message) = (*action_error).clone() {
                <ErrorBanner {message} on_close={clear_error} />
            }
            <SearchControls
                query={(*query).clone()}
                {on_query}
                aria_label={t::SEARCH_ARIA}
                status={StatusOptions::tickets(&status, on_status)}
                {on_reset}
            />
            { body }
            if let Some(ticket) = (*responding).clone() {
                <RespondModal {ticket} {on_submit} {on_cancel} />
            }
        </section>
    }
}
