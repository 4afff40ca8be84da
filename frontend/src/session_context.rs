use std::rc::Rc;

use web_sys::{window, Storage};
use yew::prelude::*;
use zetho_admin_shared::{
    models::LoginResponse,
    session::{Session, TokenStore, TOKEN_STORAGE_KEY},
};

use crate::logging;

/// Token persisted in `localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorageTokenStore;

fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
    }

    fn save(&self, token: &str) {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.set_item(TOKEN_STORAGE_KEY, token) {
                logging::error("failed to persist session token", format!("{err:?}"));
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Session,
    /// Message under the login form, if the last attempt failed.
    pub login_error: Option<String>,
}

impl SessionState {
    fn restore() -> Self {
        let session = Session::init(&LocalStorageTokenStore);
        if session.is_authenticated() {
            logging::info("restored admin session");
        }
        Self {
            session,
            login_error: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

pub enum SessionAction {
    /// Backend answered the login request.
    Login(LoginResponse),
    /// The login request never got an answer.
    LoginFailed(String),
    Logout,
    ClearError,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::Login(response) => {
                next.login_error = next
                    .session
                    .apply_login(&response, &LocalStorageTokenStore)
                    .err();
            },
            SessionAction::LoginFailed(message) => {
                next.login_error = Some(message);
            },
            SessionAction::Logout => {
                next.session.logout(&LocalStorageTokenStore);
                next.login_error = None;
            },
            SessionAction::ClearError => {
                next.login_error = None;
            },
        }
        Rc::new(next)
    }
}

pub type SessionContext = UseReducerHandle<SessionState>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionState::restore);
    html! {
        <ContextProvider<SessionContext> context={state}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
