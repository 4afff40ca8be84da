use yew::prelude::*;
use zetho_admin_shared::confirm::ConfirmCopy;

use crate::i18n::current::common as common_text;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    /// `None` keeps the dialog closed.
    pub copy: Option<ConfirmCopy>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    /// Red confirm button for destructive actions.
    #[prop_or(false)]
    pub danger: bool,
}

#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let Some(copy) = props.copy.as_ref() else {
        return Html::default();
    };

    let on_confirm = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let confirm_classes = classes!(
        "rounded-lg",
        "px-4",
        "py-2",
        "text-sm",
        "font-semibold",
        "text-white",
        if props.danger {
            "bg-red-600 hover:bg-red-700"
        } else {
            "bg-indigo-600 hover:bg-indigo-700"
        }
    );

    html! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/40 p-4"
            role="dialog"
            aria-modal="true"
            aria-labelledby="confirm-modal-title"
        >
            <div class="w-full max-w-md rounded-2xl bg-white p-6 shadow-xl">
                <h2 id="confirm-modal-title" class="mb-2 text-lg font-semibold text-slate-900">
                    { copy.title.clone() }
                </h2>
                <p class="mb-6 text-sm text-slate-600">{ copy.message.clone() }</p>
                <div class="flex justify-end gap-3">
                    <button
                        type="button"
                        class="rounded-lg border border-slate-200 px-4 py-2 text-sm font-medium text-slate-700 hover:bg-slate-50"
                        onclick={on_cancel}
                    >
                        { common_text::CANCEL }
                    </button>
                    <button type="button" class={confirm_classes} onclick={on_confirm}>
                        { copy.confirm_label.clone() }
                    </button>
                </div>
            </div>
        </div>
    }
}
