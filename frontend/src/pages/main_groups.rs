use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use zetho_admin_shared::{
    confirm::{ConfirmCopy, ConfirmState},
    filter::search_view,
    models::{MainGroup, MainGroupInput},
    RecordId,
};

use crate::{
    api,
    components::{
        confirm_modal::ConfirmModal,
        error_banner::ErrorBanner,
        loading_spinner::LoadingSpinner,
        pagination::PageControls,
        search_controls::SearchControls,
        stats_card::StatsCard,
        toast::{Toast, ToastMessage},
    },
    config::MAIN_GROUPS_PAGE_SIZE,
    hooks::{use_page_window, use_remote, RemoteState},
    i18n::{
        current::{common as common_text, main_groups as t},
        fill_two,
    },
    logging,
};

fn delete_copy() -> ConfirmCopy {
    ConfirmCopy {
        title: t::DELETE_TITLE.to_string(),
        message: t::DELETE_MESSAGE.to_string(),
        confirm_label: common_text::DELETE.to_string(),
    }
}

#[function_component(MainGroupsPage)]
pub fn main_groups_page() -> Html {
    let groups = use_remote(api::fetch_main_groups, t::LOAD_FAILED);
    let name = use_state(String::new);
    let description = use_state(String::new);
    let editing = use_state(|| Option::<RecordId>::None);
    let saving = use_state(|| false);
    let query = use_state(String::new);
    let confirm = use_state(ConfirmState::<RecordId>::default);
    let toast = use_state(|| Option::<ToastMessage>::None);

    let all = groups.data().cloned().unwrap_or_default();
    let matching = search_view(&all, &query);
    let (page, go_to_page) = use_page_window(matching.len(), MAIN_GROUPS_PAGE_SIZE);
    let visible = page.slice(&matching);

    let reset_form = {
        let name = name.clone();
        let description = description.clone();
        let editing = editing.clone();
        Callback::from(move |_: ()| {
            name.set(String::new());
            description.set(String::new());
            editing.set(None);
        })
    };
    let on_name = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            description.set(area.value());
        })
    };
    let on_query = {
        let query = query.clone();
        let go_to_page = go_to_page.clone();
        Callback::from(move |value: String| {
            query.set(value);
            go_to_page.emit(1);
        })
    };

    let on_submit = {
        let name = name.clone();
        let description = description.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        let reload = groups.reload.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *saving {
                return;
            }
            let input = MainGroupInput {
                name: name.trim().to_string(),
                description: description.trim().to_string(),
            };
            if input.name.is_empty() {
                toast.set(Some(ToastMessage::error(t::NAME_REQUIRED)));
                return;
            }
            saving.set(true);
            let target = (*editing).clone();
            let saving = saving.clone();
            let toast = toast.clone();
            let reload = reload.clone();
            let reset_form = reset_form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match &target {
                    Some(id) => api::update_main_group(id, &input).await,
                    None => api::create_main_group(&input).await,
                };
                saving.set(false);
                match result {
                    Ok(()) => {
                        let done = if target.is_some() { t::UPDATED } else { t::ADDED };
                        toast.set(Some(ToastMessage::success(done)));
                        reset_form.emit(());
                        reload.emit(());
                    },
                    Err(err) => {
                        logging::error(t::SAVE_FAILED, &err);
                        toast.set(Some(ToastMessage::error(t::SAVE_FAILED)));
                    },
                }
            });
        })
    };
    let on_cancel_edit = {
        let reset_form = reset_form.clone();
        Callback::from(move |_: MouseEvent| reset_form.emit(()))
    };

    let on_edit = {
        let name = name.clone();
        let description = description.clone();
        let editing = editing.clone();
        Callback::from(move |group: MainGroup| {
            name.set(group.name);
            description.set(group.description);
            editing.set(Some(group.id));
        })
    };
    let on_delete = {
        let confirm = confirm.clone();
        Callback::from(move |id: RecordId| confirm.set(ConfirmState::open(id)))
    };
    let on_cancel_delete = {
        let confirm = confirm.clone();
        Callback::from(move |_: ()| confirm.set(ConfirmState::Closed))
    };
    let on_confirm_delete = {
        let confirm = confirm.clone();
        let toast = toast.clone();
        let reload = groups.reload.clone();
        let editing = editing.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |_: ()| {
            let mut state = (*confirm).clone();
            let Some(id) = state.confirm() else {
                return;
            };
            confirm.set(state);
            if (*editing).as_ref() == Some(&id) {
                reset_form.emit(());
            }
            let toast = toast.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_main_group(&id).await {
                    Ok(()) => {
                        toast.set(Some(ToastMessage::success(t::DELETED)));
                        reload.emit(());
                    },
                    Err(err) => {
                        logging::error(t::DELETE_FAILED, &err);
                        toast.set(Some(ToastMessage::error(t::DELETE_FAILED)));
                    },
                }
            });
        })
    };
    let on_toast_close = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let is_editing = editing.is_some();
    let form = html! {
        <form class="space-y-4 rounded-2xl bg-white p-5 shadow-sm" onsubmit={on_submit}>
            <label class="block text-sm font-medium text-slate-700">
                { t::NAME }
                <input
                    type="text"
                    class="mt-1 w-full rounded-lg border border-slate-200 px-3 py-2 text-sm focus:border-indigo-400 focus:outline-none"
                    placeholder={t::NAME_PLACEHOLDER}
                    value={(*name).clone()}
                    oninput={on_name}
                />
            </label>
            <label class="block text-sm font-medium text-slate-700">
                { t::DESCRIPTION }
                <textarea
                    class="mt-1 h-24 w-full rounded-lg border border-slate-200 px-3 py-2 text-sm focus:border-indigo-400 focus:outline-none"
                    placeholder={t::DESCRIPTION_PLACEHOLDER}
                    value={(*description).clone()}
                    oninput={on_description}
                />
            </label>
            <div class="flex gap-3">
                <button
                    type="submit"
                    class="rounded-lg bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700 disabled:opacity-50"
                    disabled={*saving}
                >
                    { if is_editing { t::UPDATE_GROUP } else { t::ADD_GROUP } }
                </button>
                if is_editing {
                    <button
                        type="button"
                        class="rounded-lg border border-slate-200 px-4 py-2 text-sm font-medium text-slate-700 hover:bg-slate-50"
                        onclick={on_cancel_edit}
                    >
                        { common_text::CANCEL }
                    </button>
                }
            </div>
        </form>
    };

    let list = match groups.state() {
        RemoteState::Loading => html! { <LoadingSpinner label={AttrValue::from(t::LOADING)} /> },
        RemoteState::Failed(message) => html! {
            <ErrorBanner
                message={message.clone()}
                auto_dismiss={false}
                on_retry={groups.reload.clone()}
            />
        },
        RemoteState::Loaded(_) if visible.is_empty() => html! {
            <div class="rounded-2xl bg-white p-10 text-center text-slate-500">{ t::EMPTY }</div>
        },
        RemoteState::Loaded(_) => html! {
            <div class="overflow-x-auto rounded-2xl bg-white shadow-sm">
                <table class="w-full text-left text-sm">
                    <thead class="bg-slate-50 text-xs uppercase text-slate-500">
                        <tr>
                            <th class="px-4 py-3">{ t::COLUMN_NAME }</th>
                            <th class="px-4 py-3">{ t::COLUMN_DESCRIPTION }</th>
                            <th class="px-4 py-3 text-right">{ t::COLUMN_ACTIONS }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.iter().map(|group| {
                            let edit = {
                                let on_edit = on_edit.clone();
                                let group = group.clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(group.clone()))
                            };
                            let delete = {
                                let on_delete = on_delete.clone();
                                let id = group.id.clone();
                                Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                            };
                            html! {
                                <tr key={group.id.to_string()} class="border-t border-slate-100">
                                    <td class="px-4 py-3 font-medium text-slate-900">{ group.name.clone() }</td>
                                    <td class="px-4 py-3 text-slate-600">
                                        { if group.description.is_empty() {
                                            common_text::NO_VALUE.to_string()
                                        } else {
                                            group.description.clone()
                                        } }
                                    </td>
                                    <td class="px-4 py-3">
                                        <div class="flex justify-end gap-2">
                                            <button
                                                type="button"
                                                class="rounded-lg border border-slate-200 px-3 py-1 text-xs font-semibold text-slate-600 hover:bg-slate-50"
                                                onclick={edit}
                                            >
                                                { common_text::EDIT }
                                            </button>
                                            <button
                                                type="button"
                                                class="rounded-lg bg-red-50 px-3 py-1 text-xs font-semibold text-red-600 hover:bg-red-100"
                                                onclick={delete}
                                            >
                                                { common_text::DELETE }
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        },
    };

    html! {
        <section class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-slate-900">{ t::TITLE }</h2>
                <p class="text-sm text-slate-500">{ t::SUBTITLE }</p>
            </div>
            <div class="grid gap-6 lg:grid-cols-3">
                <div class="space-y-6">
                    <StatsCard icon="👥" label={t::STAT_TOTAL} value={all.len() as u64} />
                    { form }
                </div>
                <div class="space-y-4 lg:col-span-2">
                    <SearchControls
                        query={(*query).clone()}
                        {on_query}
                        aria_label={t::SEARCH_PLACEHOLDER}
                        placeholder={t::SEARCH_PLACEHOLDER}
                    />
                    <p class="text-xs text-slate-500">
                        { fill_two(t::SHOWING_TEMPLATE, visible.len(), matching.len()) }
                    </p>
                    { list }
                    <PageControls window={page} on_change={go_to_page} />
                </div>
            </div>
            <ConfirmModal
                copy={confirm.is_open().then(delete_copy)}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
                danger={true}
            />
            <Toast message={(*toast).clone()} on_close={on_toast_close} />
        </section>
    }
}
