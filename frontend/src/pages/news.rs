use yew::prelude::*;
use zetho_admin_shared::{
    confirm::{ConfirmCopy, ConfirmState},
    models::{NewsInput, NewsItem},
    text::excerpt,
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
    config::NEWS_PREVIEW_CHARS,
    hooks::{use_remote, RemoteState},
    i18n::{
        current::{common as common_text, news as t},
        fill_one,
    },
    logging,
    utils::{calendar_date, clear_file, image_url, input_value, picked_file, textarea_value},
};

fn delete_copy() -> ConfirmCopy {
    ConfirmCopy {
        title: t::DELETE_TITLE.to_string(),
        message: t::DELETE_MESSAGE.to_string(),
        confirm_label: common_text::DELETE.to_string(),
    }
}

const INPUT_CLASSES: &str = "mt-1 w-full rounded-lg border border-slate-200 px-3 py-2 text-sm \
                             focus:border-indigo-400 focus:outline-none";

#[derive(Properties, PartialEq)]
struct NewsCardProps {
    item: NewsItem,
    on_edit: Callback<NewsItem>,
    on_delete: Callback<RecordId>,
}

#[function_component(NewsCard)]
fn news_card(props: &NewsCardProps) -> Html {
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
    let doctor = if item.doctor_id.is_empty() {
        common_text::NO_VALUE.to_string()
    } else {
        item.doctor_id.to_string()
    };

    html! {
        <article class="overflow-hidden rounded-2xl bg-white shadow-sm">
            <div class="relative h-40 bg-slate-100">
                if let Some(src) = image_url(&item.image_url) {
                    <img class="h-full w-full object-cover" {src} alt={item.heading.clone()} />
                } else {
                    <div class="flex h-full items-center justify-center text-4xl" aria-hidden="true">{ "📰" }</div>
                }
                if !item.specialty.is_empty() {
                    <span class="absolute left-3 top-3 rounded-full bg-white/90 px-2.5 py-0.5 text-xs font-semibold text-indigo-700">
                        { item.specialty.clone() }
                    </span>
                }
            </div>
            <div class="space-y-3 p-5">
                <div>
                    <h3 class="font-semibold text-slate-900">{ item.heading.clone() }</h3>
                    <span class="text-xs text-slate-500">{ fill_one(t::DOCTOR_TEMPLATE, doctor) }</span>
                </div>
                <p class="text-sm text-slate-600">{ excerpt(&item.content, NEWS_PREVIEW_CHARS) }</p>
                <div class="flex items-center justify-between">
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
                    <span class="text-xs text-slate-400">{ calendar_date(&item.created_at) }</span>
                </div>
            </div>
        </article>
    }
}

#[function_component(NewsPage)]
pub fn news_page() -> Html {
    let news = use_remote(api::fetch_news, t::LOAD_FAILED);
    let show_form = use_state(|| false);
    let form = use_state(NewsInput::default);
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
            form.set(NewsInput::default());
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
    let on_field = |apply: fn(&mut NewsInput, String), read: fn(&InputEvent) -> String| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, read(&event));
            form.set(next);
        })
    };
    let on_doctor = on_field(|f, v| f.doctor_id = v, input_value);
    let on_heading = on_field(|f, v| f.heading = v, input_value);
    let on_specialty = on_field(|f, v| f.specialty = v, input_value);
    let on_content = on_field(|f, v| f.content = v, textarea_value);

    let on_submit = {
        let form = form.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        let file_input = file_input.clone();
        let toast = toast.clone();
        let reload = news.reload.clone();
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
                    Some(id) => api::update_news(id, &input, image).await,
                    None => api::create_news(&input, image).await,
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
    let on_cancel_form = {
        let reset_form = reset_form.clone();
        Callback::from(move |_: MouseEvent| reset_form.emit(()))
    };

    let on_edit = {
        let form = form.clone();
        let editing = editing.clone();
        let show_form = show_form.clone();
        Callback::from(move |item: NewsItem| {
            form.set(NewsInput::from_item(&item));
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
        let reload = news.reload.clone();
        Callback::from(move |_: ()| {
            let mut state = (*confirm).clone();
            let Some(id) = state.confirm() else {
                return;
            };
            confirm.set(state);
            let toast = toast.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_news(&id).await {
                    Ok(()) => {
                        toast.set(Some(ToastMessage::success(t::DELETED)));
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
    let on_toast_close = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let is_editing = editing.is_some();
    let form_view = html! {
        <form class="grid gap-4 rounded-2xl bg-white p-6 shadow-sm md:grid-cols-2" onsubmit={on_submit}>
            <div class="md:col-span-2">
                <h3 class="text-lg font-semibold text-slate-900">
                    { if is_editing { t::FORM_EDIT } else { t::FORM_ADD } }
                </h3>
                <p class="text-sm text-slate-500">{ t::FORM_HINT }</p>
            </div>
            <label class="block text-sm font-medium text-slate-700">
                { t::DOCTOR_ID }
                <input
                    type="text"
                    class={INPUT_CLASSES}
                    placeholder={t::DOCTOR_ID_PLACEHOLDER}
                    value={form.doctor_id.clone()}
                    oninput={on_doctor}
                    required={true}
                />
            </label>
            <label class="block text-sm font-medium text-slate-700">
                { t::SPECIALTY }
                <input
                    type="text"
                    class={INPUT_CLASSES}
                    placeholder={t::SPECIALTY_PLACEHOLDER}
                    value={form.specialty.clone()}
                    oninput={on_specialty}
                />
            </label>
            <label class="block text-sm font-medium text-slate-700 md:col-span-2">
                { t::HEADING }
                <input
                    type="text"
                    class={INPUT_CLASSES}
                    placeholder={t::HEADING_PLACEHOLDER}
                    value={form.heading.clone()}
                    oninput={on_heading}
                    required={true}
                />
            </label>
            <label class="block text-sm font-medium text-slate-700 md:col-span-2">
                { t::CONTENT }
                <textarea
                    class={classes!(INPUT_CLASSES, "h-32")}
                    placeholder={t::CONTENT_PLACEHOLDER}
                    value={form.content.clone()}
                    oninput={on_content}
                    required={true}
                />
            </label>
            <label class="block text-sm font-medium text-slate-700 md:col-span-2">
                { common_text::IMAGE }
                <input ref={file_input} type="file" accept="image/*" class="mt-1 block w-full text-sm" />
            </label>
            <div class="flex justify-end gap-3 md:col-span-2">
                <button
                    type="button"
                    class="rounded-lg border border-slate-200 px-4 py-2 text-sm font-medium text-slate-700 hover:bg-slate-50"
                    onclick={on_cancel_form}
                >
                    { common_text::CANCEL }
                </button>
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

    let list = match news.state() {
        RemoteState::Loading => html! { <LoadingSpinner label={AttrValue::from(t::LOADING)} /> },
        RemoteState::Failed(message) => html! {
            <ErrorBanner
                message={message.clone()}
                auto_dismiss={false}
                on_retry={news.reload.clone()}
            />
        },
        RemoteState::Loaded(items) if items.is_empty() => html! {
            <div class="rounded-2xl bg-white p-10 text-center">
                <p class="text-4xl" aria-hidden="true">{ "📰" }</p>
                <h3 class="mt-2 font-semibold text-slate-900">{ t::EMPTY }</h3>
                <p class="text-sm text-slate-500">{ t::EMPTY_HINT }</p>
            </div>
        },
        RemoteState::Loaded(items) => html! {
            <div class="grid gap-5 md:grid-cols-2 xl:grid-cols-3">
                { for items.iter().map(|item| html! {
                    <NewsCard
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
