use yew::prelude::*;

use crate::{
    api,
    components::{error_banner::ErrorBanner, loading_spinner::LoadingSpinner},
    hooks::{use_remote, RemoteState},
    i18n::current::{common as common_text, reported_users as t},
    utils::calendar_date,
};

/// Read-only list of user reports.
#[function_component(ReportedUsersPage)]
pub fn reported_users_page() -> Html {
    let users = use_remote(api::fetch_reported_users, t::LOAD_FAILED);

    let body = match users.state() {
        RemoteState::Loading => html! { <LoadingSpinner label={AttrValue::from(t::LOADING)} /> },
        RemoteState::Failed(message) => html! {
            <ErrorBanner
                message={message.clone()}
                auto_dismiss={false}
                on_retry={users.reload.clone()}
            />
        },
        RemoteState::Loaded(list) if list.is_empty() => html! {
            <div class="rounded-2xl bg-white p-10 text-center text-slate-500">{ t::EMPTY }</div>
        },
        RemoteState::Loaded(list) => html! {
            <div class="overflow-x-auto rounded-2xl bg-white shadow-sm">
                <table class="w-full text-left text-sm">
                    <thead class="bg-slate-50 text-xs uppercase text-slate-500">
                        <tr>
                            <th class="px-4 py-3">{ t::USER_ID }</th>
                            <th class="px-4 py-3">{ t::USERNAME }</th>
                            <th class="px-4 py-3">{ t::REPORTED_BY }</th>
                            <th class="px-4 py-3">{ t::REASON }</th>
                            <th class="px-4 py-3">{ t::DATE }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for list.iter().enumerate().map(|(index, user)| html! {
                            <tr key={format!("{}-{index}", user.user_id)} class="border-t border-slate-100">
                                <td class="px-4 py-3 font-mono text-xs">{ user.user_id.to_string() }</td>
                                <td class="px-4 py-3">
                                    { if user.username.is_empty() { common_text::NO_VALUE } else { user.username.as_str() } }
                                </td>
                                <td class="px-4 py-3">{ user.reported_by.to_string() }</td>
                                <td class="px-4 py-3">{ user.reason.clone() }</td>
                                <td class="px-4 py-3 text-slate-500">{ calendar_date(&user.created_at) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        },
    };

    html! {
        <section class="space-y-6">
            <h2 class="text-2xl font-bold text-slate-900">{ t::TITLE }</h2>
            { body }
        </section>
    }
}
