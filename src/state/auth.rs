//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaded once from storage at startup, then kept in memory. The router guard
//! and the API client both read it through `BearerSource`; storage is only
//! written here and never re-read after load.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::LoginResponse;
use crate::util::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USER_ID_KEY: &str = "user_id";
pub const USERNAME_KEY: &str = "username";

/// Username stored when the login response carries no display name.
pub const DEFAULT_USERNAME: &str = "管理员";

pub const ADMIN_ROLE: &str = "admin";

/// Current session. Every field is `None` when logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub role: Option<String>,
    pub username: Option<String>,
    pub user_id: Option<String>,
}

impl AuthState {
    /// Restore the session persisted in `store`.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self {
            token: store.get(TOKEN_KEY),
            role: store.get(ROLE_KEY),
            username: store.get(USERNAME_KEY),
            user_id: store.get(USER_ID_KEY),
        }
    }

    /// Persist a login response and adopt it as the current session.
    ///
    /// Token and role are taken as-is; a missing or empty name falls back to
    /// [`DEFAULT_USERNAME`].
    pub fn set_session<S: KeyValueStore + ?Sized>(&mut self, store: &S, data: &LoginResponse) {
        let username = data
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_USERNAME);

        store.set(TOKEN_KEY, &data.access_token);
        store.set(ROLE_KEY, &data.role);
        store.set(USER_ID_KEY, &data.user_id);
        store.set(USERNAME_KEY, username);

        self.token = Some(data.access_token.clone());
        self.role = Some(data.role.clone());
        self.user_id = Some(data.user_id.clone());
        self.username = Some(username.to_owned());
        log::info!("session established for user {} ({})", data.user_id, data.role);
    }

    /// Wipe all of `store` and forget the in-memory session.
    pub fn clear_session<S: KeyValueStore + ?Sized>(&mut self, store: &S) {
        store.clear();
        *self = Self::default();
        log::info!("session cleared");
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

/// Source of the bearer token attached to outgoing requests.
pub trait BearerSource {
    fn bearer_token(&self) -> Option<String>;
}

impl BearerSource for AuthState {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}
