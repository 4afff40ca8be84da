use web_sys::HtmlInputElement;
use yew::prelude::*;
use zetho_admin_shared::{models::LoginRequest, session::login_error_message};

use crate::{
    api,
    i18n::current::login as t,
    logging,
    session_context::{SessionAction, SessionContext},
};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_context::<SessionContext>();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let loading = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            password.set(input.value());
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let on_submit = {
        let session = session.clone();
        let username = username.clone();
        let password = password.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }
            let Some(session) = session.clone() else {
                return;
            };
            let credentials = LoginRequest {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            session.dispatch(SessionAction::ClearError);
            loading.set(true);

            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::login(&credentials).await;
                loading.set(false);
                match result {
                    Ok(response) => session.dispatch(SessionAction::Login(response)),
                    Err(err) => {
                        logging::error("login request failed", &err);
                        session.dispatch(SessionAction::LoginFailed(
                            login_error_message(&err).to_string(),
                        ));
                    },
                }
            });
        })
    };

    let error_message = session
        .as_ref()
        .and_then(|session| session.login_error.clone());
    let password_type = if *show_password { "text" } else { "password" };
    let toggle_label = if *show_password { t::HIDE_PASSWORD } else { t::SHOW_PASSWORD };

    html! {
        <div class="flex min-h-screen items-center justify-center bg-gradient-to-br from-indigo-600 via-violet-600 to-slate-900 p-4">
            <div class="w-full max-w-md rounded-3xl bg-white p-8 shadow-2xl">
                <div class="mb-8 text-center">
                    <div class="mb-3 text-4xl" aria-hidden="true">{"🔐"}</div>
                    <h2 class="text-2xl font-bold text-slate-900">{ t::TITLE }</h2>
                    <p class="mt-1 text-sm text-slate-500">{ t::SUBTITLE }</p>
                </div>

                <form class="space-y-5" onsubmit={on_submit}>
                    <div class="space-y-1">
                        <label for="username" class="text-sm font-medium text-slate-700">{ t::USERNAME }</label>
                        <input
                            id="username"
                            type="text"
                            name="username"
                            class="w-full rounded-lg border border-slate-200 px-3 py-2 focus:border-indigo-400 focus:outline-none"
                            placeholder={t::USERNAME_PLACEHOLDER}
                            autocomplete="username"
                            required=true
                            value={(*username).clone()}
                            oninput={on_username}
                        />
                    </div>

                    <div class="space-y-1">
                        <label for="password" class="text-sm font-medium text-slate-700">{ t::PASSWORD }</label>
                        <div class="relative">
                            <input
                                id="password"
                                type={password_type}
                                name="password"
                                class="w-full rounded-lg border border-slate-200 px-3 py-2 pr-12 focus:border-indigo-400 focus:outline-none"
                                placeholder={t::PASSWORD_PLACEHOLDER}
                                autocomplete="current-password"
                                required=true
                                value={(*password).clone()}
                                oninput={on_password}
                            />
                            <button
                                type="button"
                                class="absolute inset-y-0 right-2 px-2 text-lg"
                                aria-label={toggle_label}
                                onclick={toggle_password}
                            >
                                { if *show_password { "🙈" } else { "👁️" } }
                            </button>
                        </div>
                    </div>

                    if let Some(message) = error_message {
                        <div class="flex items-center gap-2 rounded-lg bg-red-50 px-3 py-2 text-sm text-red-700" role="alert">
                            <span aria-hidden="true">{"⚠️"}</span>
                            { message }
                        </div>
                    }

                    <button
                        type="submit"
                        class="w-full rounded-lg bg-indigo-600 py-2.5 text-sm font-semibold text-white hover:bg-indigo-700 disabled:opacity-60"
                        disabled={*loading}
                    >
                        { if *loading { t::SUBMITTING } else { t::SUBMIT } }
                    </button>
                </form>

                <p class="mt-6 text-center text-xs text-slate-400">{ t::FOOTER }</p>
            </div>
        </div>
    }
}
