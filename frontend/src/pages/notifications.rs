use yew::prelude::*;
use zetho_admin_shared::{
    confirm::{ConfirmCopy, ConfirmState},
    models::{Notification, NotificationInput, NotificationKind},
    RecordId,
};

use crate::{
    api,
    components::{
        confirm_modal::ConfirmModal,
        error_banner::ErrorBanner,
        loading_spinner::LoadingSpinner,
        toast::{Toast, ToastMessage},
    },
    hooks::{use_remote, RemoteState},
    i18n::current::{common as common_text, notifications as t},
    logging,
    utils::{clear_file, image_url, input_value, picked_file, select_value, textarea_value},
};

const INPUT_CLASSES: &str = "mt-1 w-full rounded-lg border border-slate-200 px-3 py-2 text-sm \
                             focus:border-indigo-400 focus:outline-none";

fn delete_copy() -> ConfirmCopy {
    ConfirmCopy {
        title: t::DELETE_TITLE.to_string(),
        message: t::DELETE_MESSAGE.to_string(),
        confirm_label: common_text::DELETE.to_string(),
    }
}

fn kind_classes(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "bg-sky-50 text-sky-700",
        NotificationKind::Update => "bg-indigo-50 text-indigo-700",
        NotificationKind::Alert => "bg-red-50 text-red-700",
    }
}

#[derive(Properties, PartialEq)]
struct NotificationCardProps {
    item: Notification,
    on_edit: Callback<Notification>,
    on_delete: Callback<RecordId>,
}

#[function_component(NotificationCard)]
fn notification_card(props: &NotificationCardProps) -> Html {
    let item = &props.item;
    let edit = {
        let on_edit = props.on_edit.clone();
        let item = item.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(item.clone()))
    };
    let delete = {
        let on_delete = props.on_delete.clone();
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
    };

    html! {
        <article class="flex gap-4 rounded-2xl bg-white p-5 shadow-sm">
            if let Some(src) = image_url(&item.image_url) {
                <img class="h-16 w-16 shrink-0 rounded-xl object-cover" {src} alt={t::IMAGE_ALT} />
            }
            <div class="min-w-0 flex-1 space-y-2">
                <div class="flex items-center gap-2">
                    <h3 class="truncate font-semibold text-slate-900">{ item.title.clone() }</h3>
                    <span
                        class={classes!(
                            "rounded-full",
                            "px-2.5",
                            "py-0.5",
                            "text-xs",
                            "font-semibold",
                            kind_classes(item.kind)
                        )}
                    >
                        { item.kind.label() }
                    </span>
                </div>
                <p class="text-sm text-slate-600">{ item.message.clone() }</p>
                <div class="flex gap-2">
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
            </div>
        </article>
    }
}

#[function_component(NotificationsPage)]
pub fn notifications_page() -> Html {
    let notifications = use_remote(api::fetch_notifications, t::LOAD_FAILED);
    let show_form = use_state(|| false);
    let form = use_state(NotificationInput::default);
    let editing = use_state(|| Option::<RecordId>::None);
    let saving = use_state(|| false);
    let file_input = use_node_ref();
    let confirm = use_state(ConfirmState::<RecordId>::default);
    let toast = use_state(|| Option::<ToastMessage>::None);

    let reset_form = {
        let form = form.clone();
        let editing = editing.clone();
        let show_form = show_form.clone();
        let file_input = file_input.clone();
        Callback::from(move |_: ()| {
            form.set(NotificationInput::default());
            editing.set(None);
            show_form.set(false);
            clear_file(&file_input);
        })
    };
    let toggle_form = {
        let show_form = show_form.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |_: MouseEvent| {
            if *show_form {
                reset_form.emit(());
            } else {
                show_form.set(true);
            }
        })
    };
    let on_title = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let mut next = (*form).clone();
            next.title = input_value(&event);
            form.set(next);
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let mut next = (*form).clone();
            next.message = textarea_value(&event);
            form.set(next);
        })
    };
    let on_kind = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let mut next = (*form).clone();
            next.kind = NotificationKind::parse_or_default(&select_value(&event));
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        let file_input = file_input.clone();
        let toast = toast.clone();
        let reload = notifications.reload.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *saving {
                return;
            }
            saving.set(true);
            let input = (*form).clone();
            let image = picked_file(&file_input);
            let target = (*editing).clone();
            let saving = saving.clone();
            let toast = toast.clone();
            let reload = reload.clone();
            let reset_form = reset_form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match &target {
                    Some(id) => api::update_notification(id, &input, image).await,
                    None => api::create_notification(&input, image).await,
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
                        logging::error(t::FAILED, &err);
                        toast.set(Some(ToastMessage::error(t::FAILED)));
                    },
                }
            });
        })
    };

    let on_edit = {
        let form = form.clone();
        let editing = editing.clone();
        let show_form = show_form.clone();
        Callback::from(move |item: Notification| {
            form.set(NotificationInput::from_item(&item));
            editing.set(Some(item.id));
            show_form.set(true);
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
        let reload = notifications.reload.clone();
        Callback::from(move |_: ()| {
            let mut state = (*confirm).clone();
            let Some(id) = state.confirm() else {
                return;
            };
            confirm.set(state);
            let toast = toast.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_notification(&id).await {
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
    let form_view = html! {
        <form class="space-y-4 rounded-2xl bg-white p-6 shadow-sm" onsubmit={on_submit}>
            <h3 class="text-lg font-semibold text-slate-900">
                { if is_editing { t::FORM_EDIT } else { t::FORM_ADD } }
            </h3>
            <div class="grid gap-4 md:grid-cols-2">
                <label class="block text-sm font-medium text-slate-700">
                    { t::FIELD_TITLE }
                    <input
                        type="text"
                        class={INPUT_CLASSES}
                        placeholder={t::FIELD_TITLE_PLACEHOLDER}
                        value={form.title.clone()}
                        oninput={on_title}
                        required={true}
                    />
                </label>
                <label class="block text-sm font-medium text-slate-700">
                    { t::FIELD_TYPE }
                    <select class={INPUT_CLASSES} onchange={on_kind}>
                        { for NotificationKind::ALL.iter().map(|kind| html! {
                            <option value={kind.as_str()} selected={form.kind == *kind}>
                                { kind.label() }
                            </option>
                        }) }
                    </select>
                </label>
            </div>
            <label class="block text-sm font-medium text-slate-700">
                { t::FIELD_MESSAGE }
                <textarea
                    class={classes!(INPUT_CLASSES, "h-28")}
                    placeholder={t::FIELD_MESSAGE_PLACEHOLDER}
                    value={form.message.clone()}
                    oninput={on_message}
                    required={true}
                />
            </label>
            <label class="block text-sm font-medium text-slate-700">
                { common_text::IMAGE }
                <input ref={file_input} type="file" accept="image/*" class="mt-1 block w-full text-sm" />
            </label>
            <div class="flex justify-end">
                <button
                    type="submit"
                    class="rounded-lg bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700 disabled:opacity-50"
                    disabled={*saving}
                >
                    { if is_editing { t::SUBMIT_UPDATE } else { t::SUBMIT_ADD } }
                </button>
            </div>
        </form>
    };

    let list = match notifications.state() {
        RemoteState::Loading => html! { <LoadingSpinner label={AttrValue::from(t::LOADING)} /> },
        RemoteState::Failed(message) => html! {
            <ErrorBanner
                message={message.clone()}
                auto_dismiss={false}
                on_retry={notifications.reload.clone()}
            />
        },
        RemoteState::Loaded(items) if items.is_empty() => html! {
            <div class="rounded-2xl bg-white p-10 text-center text-slate-500">{ t::EMPTY }</div>
        },
        RemoteState::Loaded(items) => html! {
            <div class="grid gap-4 lg:grid-cols-2">
                { for items.iter().map(|item| html! {
                    <NotificationCard
                        key={item.id.to_string()}
                        item={item.clone()}
                        on_edit={on_edit.clone()}
                        on_delete={on_delete.clone()}
                    />
                }) }
            </div>
        },
    };

    html! {
        <section class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold text-slate-900">{ t::TITLE }</h2>
                <button
                    type="button"
                    class="rounded-lg bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700"
                    onclick={toggle_form}
                >
                    { if *show_form { t::CLOSE_FORM } else { t::OPEN_FORM } }
                </button>
            </div>
            if *show_form {
                { form_view }
            }
            { list }
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
