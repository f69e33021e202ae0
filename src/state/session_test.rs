use super::*;
use crate::config::{ApiConfig, PageLocation};
use crate::net::api::{ApiClient, Method};
use crate::state::auth::{ADMIN_ROLE, DEFAULT_USERNAME, TOKEN_KEY};
use crate::util::storage::{KeyValueStore, MemoryStorage};

// =============================================================
// Helpers
// =============================================================

fn client(session: SessionHandle) -> ApiClient {
    ApiClient::new(ApiConfig::for_location(&PageLocation::new("http:", "ifms.local")), session)
}

fn authorization(client: &ApiClient) -> Option<String> {
    client.prepare(Method::Get, "/items", None).header("Authorization").map(str::to_owned)
}

fn login(token: &str, role: &str, name: Option<&str>) -> LoginResponse {
    LoginResponse {
        access_token: token.to_owned(),
        token_type: Some("bearer".to_owned()),
        role: role.to_owned(),
        user_id: "7".to_owned(),
        name: name.map(str::to_owned),
    }
}

fn seeded_storage() -> MemoryStorage {
    let store = MemoryStorage::new();
    store.set(TOKEN_KEY, "OLD");
    store.set("draft", "unrelated");
    store
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_adopts_persisted_token() {
    let session = SessionHandle::restore(seeded_storage());
    assert!(session.is_logged_in());
    assert!(!session.is_admin());
    assert_eq!(session.bearer_token().as_deref(), Some("OLD"));
}

#[test]
fn restore_from_empty_storage_is_logged_out() {
    let session = SessionHandle::restore(MemoryStorage::new());
    assert!(!session.is_logged_in());
    assert_eq!(session.username(), None);
    assert_eq!(authorization(&client(session)), None);
}

// =============================================================
// Session lifecycle through the API client
// =============================================================

#[test]
fn client_header_follows_session_lifecycle() {
    let store = seeded_storage();
    let session = SessionHandle::restore(store.clone());
    let api = client(session);
    assert_eq!(authorization(&api).as_deref(), Some("Bearer OLD"));

    session.set_session(&login("T", ADMIN_ROLE, Some("Alice")));
    assert_eq!(authorization(&api).as_deref(), Some("Bearer T"));
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("T"));
    assert!(session.is_admin());
    assert_eq!(session.username().as_deref(), Some("Alice"));

    session.clear_session();
    assert_eq!(authorization(&api), None);
    assert!(store.is_empty(), "clear_session must wipe unrelated keys too");
    assert!(!session.is_logged_in());
}

#[test]
fn set_session_without_name_uses_default_username() {
    let store = MemoryStorage::new();
    let session = SessionHandle::restore(store.clone());
    session.set_session(&login("T", "user", None));
    assert_eq!(session.username().as_deref(), Some(DEFAULT_USERNAME));
    assert!(!session.is_admin());
    assert_eq!(store.len(), 4);
}

#[test]
fn copies_share_one_session() {
    let session = SessionHandle::restore(MemoryStorage::new());
    let copy = session;
    copy.set_session(&login("T", "user", None));
    assert_eq!(session.bearer_token().as_deref(), Some("T"));
}
