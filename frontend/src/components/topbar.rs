use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    i18n::current::topbar as t,
    router::Route,
    session_context::{SessionAction, SessionContext},
};

#[function_component(Topbar)]
pub fn topbar() -> Html {
    let session = use_context::<SessionContext>();
    let navigator = use_navigator();

    let on_logout = Callback::from(move |_: MouseEvent| {
        if let Some(session) = session.as_ref() {
            session.dispatch(SessionAction::Logout);
        }
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Login);
        }
    });

    html! {
        <header class="flex items-center justify-between border-b border-slate-200 bg-white px-6 py-4">
            <div>
                <h1 class="text-lg font-semibold text-slate-900">{ t::TITLE }</h1>
                <p class="text-sm text-slate-500">{ t::SUBTITLE }</p>
            </div>
            <div class="flex items-center gap-4">
                <div class="flex items-center gap-3">
                    <span
                        class="inline-flex h-10 w-10 items-center justify-center rounded-full bg-indigo-600 text-sm font-bold text-white"
                        aria-hidden="true"
                    >
                        { t::AVATAR }
                    </span>
                    <div class="hidden leading-tight sm:block">
                        <p class="text-sm font-semibold text-slate-900">{ t::USER_NAME }</p>
                        <p class="text-xs text-slate-500">{ t::USER_ROLE }</p>
                    </div>
                </div>
                <button
                    type="button"
                    class="rounded-lg border border-slate-200 px-3 py-2 text-sm font-medium text-slate-600 hover:bg-slate-50"
                    onclick={on_logout}
                >
                    { t::LOGOUT }
                </button>
            </div>
        </header>
    }
}
