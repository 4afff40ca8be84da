//! Session gate: one persisted token, no refresh, no expiry.

use std::cell::RefCell;

use crate::{error::ApiError, models::LoginResponse};

/// Storage key holding the admin session token.
pub const TOKEN_STORAGE_KEY: &str = "adminToken";

/// Shown when the backend rejects credentials without saying why.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Shown when the login request itself failed.
pub const LOGIN_UNAVAILABLE: &str = "Something went wrong. Please try again later.";

/// Where the session token lives between page loads.
pub trait TokenStore {
    /// Persisted token, if any.
    fn load(&self) -> Option<String>;
    /// Persists `token`, replacing any previous one.
    fn save(&self, token: &str);
    /// Removes the token.
    fn clear(&self);
}

/// In-process store, for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    /// Store pre-seeded with `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        MemoryTokenStore {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Process-wide authentication flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    /// Reads the persisted token. Any non-empty token is trusted.
    pub fn init(store: &dyn TokenStore) -> Self {
        let authenticated = store.load().is_some_and(|token| !token.trim().is_empty());
        Session {
            authenticated,
        }
    }

    /// True once a login succeeded or a token was found at startup.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Applies the login response.
    ///
    /// On success the token (when present) is persisted and the session
    /// flips to authenticated. On failure nothing is persisted and the
    /// message to show is returned.
    pub fn apply_login(
        &mut self,
        response: &LoginResponse,
        store: &dyn TokenStore,
    ) -> Result<(), String> {
        if !response.success {
            let message = response
                .message
                .as_deref()
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .unwrap_or(INVALID_CREDENTIALS);
            return Err(message.to_string());
        }

        if let Some(token) = response.token.as_deref().filter(|token| !token.is_empty()) {
            store.save(token);
        }
        self.authenticated = true;
        Ok(())
    }

    /// Clears the token and drops back to the login screen.
    pub fn logout(&mut self, store: &dyn TokenStore) {
        store.clear();
        self.authenticated = false;
    }
}

/// Message for a login request that never got an answer.
pub fn login_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Rejected(_) => INVALID_CREDENTIALS,
        _ => LOGIN_UNAVAILABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_reads_persisted_token() {
        assert!(Session::init(&MemoryTokenStore::with_token("abc")).is_authenticated());
        assert!(!Session::init(&MemoryTokenStore::default()).is_authenticated());
        assert!(!Session::init(&MemoryTokenStore::with_token("  ")).is_authenticated());
    }

    #[test]
    fn successful_login_persists_token() {
        let store = MemoryTokenStore::default();
        let mut session = Session::init(&store);
        let response = LoginResponse {
            success: true,
            token: Some("abc".into()),
            message: None,
        };

        assert_eq!(session.apply_login(&response, &store), Ok(()));
        assert!(session.is_authenticated());
        assert_eq!(store.load().as_deref(), Some("abc"));
    }

    #[test]
    fn rejected_login_shows_server_message_and_persists_nothing() {
        let store = MemoryTokenStore::default();
        let mut session = Session::init(&store);
        let response = LoginResponse {
            success: false,
            token: Some("ignored".into()),
            message: Some("bad creds".into()),
        };

        assert_eq!(session.apply_login(&response, &store), Err("bad creds".to_string()));
        assert!(!session.is_authenticated());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn rejected_login_without_message_uses_fallback() {
        let store = MemoryTokenStore::default();
        let mut session = Session::default();
        let response = LoginResponse::default();
        assert_eq!(session.apply_login(&response, &store), Err(INVALID_CREDENTIALS.to_string()));
    }

    #[test]
    fn logout_clears_token() {
        let store = MemoryTokenStore::with_token("abc");
        let mut session = Session::init(&store);
        session.logout(&store);
        assert!(!session.is_authenticated());
        assert_eq!(store.load(), None);
        assert!(!Session::init(&store).is_authenticated());
    }

    #[test]
    fn transport_failures_use_generic_message() {
        assert_eq!(login_error_message(&ApiError::Network("down".into())), LOGIN_UNAVAILABLE);
        assert_eq!(login_error_message(&ApiError::Http { status: 500 }), LOGIN_UNAVAILABLE);
    }
}
