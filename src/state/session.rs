//! Session context shared by views, the router guard, and the API client.
//!
//! ARCHITECTURE
//! ============
//! Created once by the root component from persisted storage and provided via
//! context. It is the single accessor for login state: the guard asks it
//! whether a token exists and the API client asks it for the bearer token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::auth::{AuthState, BearerSource};
use crate::net::types::LoginResponse;
use crate::util::storage::AppStorage;

/// Reactive session plus the storage it persists to.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    state: RwSignal<AuthState>,
    storage: StoredValue<AppStorage>,
}

impl SessionHandle {
    /// Build the session from what `storage` already holds.
    pub fn restore(storage: AppStorage) -> Self {
        let state = RwSignal::new(AuthState::load(&storage));
        Self { state, storage: StoredValue::new(storage) }
    }

    pub fn set_session(&self, data: &LoginResponse) {
        let state = self.state;
        self.storage.with_value(|store| state.update(|s| s.set_session(store, data)));
    }

    pub fn clear_session(&self) {
        let state = self.state;
        self.storage.with_value(|store| state.update(|s| s.clear_session(store)));
    }

    /// Tracked: re-runs effects and views when the session changes.
    pub fn is_logged_in(&self) -> bool {
        self.state.with(AuthState::is_logged_in)
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(AuthState::is_admin)
    }

    pub fn username(&self) -> Option<String> {
        self.state.with(|s| s.username.clone())
    }
}

impl BearerSource for SessionHandle {
    fn bearer_token(&self) -> Option<String> {
        self.state.try_with_untracked(AuthState::bearer_token).flatten()
    }
}
