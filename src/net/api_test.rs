use std::collections::HashMap;
use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use super::*;
use crate::config::PageLocation;
use crate::state::auth::AuthState;

// =============================================================
// Helpers
// =============================================================

fn config() -> ApiConfig {
    ApiConfig::for_location(&PageLocation::new("http:", "ifms.local"))
}

fn logged_in(token: &str) -> AuthState {
    AuthState { token: Some(token.to_owned()), role: Some("user".to_owned()), ..AuthState::default() }
}

/// Drive a future that completes without suspending, as every transport
/// call does off-browser.
fn ready<F: Future>(future: F) -> F::Output {
    let mut cx = Context::from_waker(Waker::noop());
    match pin!(future).poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future suspended without a browser transport"),
    }
}

// =============================================================
// URL joining
// =============================================================

#[test]
fn join_url_inserts_single_slash() {
    assert_eq!(join_url("http://h:8000/api", "/items"), "http://h:8000/api/items");
    assert_eq!(join_url("http://h:8000/api", "items"), "http://h:8000/api/items");
    assert_eq!(join_url("http://h:8000/api/", "//items"), "http://h:8000/api/items");
}

#[test]
fn join_url_keeps_query_string() {
    assert_eq!(
        join_url("http://h:8000/api", "/operation_logs?limit=50"),
        "http://h:8000/api/operation_logs?limit=50"
    );
}

#[test]
fn join_url_passes_absolute_urls_through() {
    assert_eq!(join_url("http://h:8000/api", "https://cdn.example.com/x"), "https://cdn.example.com/x");
}

#[test]
fn join_url_empty_path_is_base() {
    assert_eq!(join_url("http://h:8000/api", ""), "http://h:8000/api");
}

// =============================================================
// Request interceptor
// =============================================================

#[test]
fn prepare_attaches_bearer_token_when_logged_in() {
    let client = ApiClient::new(config(), logged_in("abc.def"));
    let request = client.prepare(Method::Get, "/items", None);
    assert_eq!(request.header("Authorization"), Some("Bearer abc.def"));
    assert_eq!(request.url, "http://ifms.local:8000/api/items");
}

#[test]
fn prepare_omits_authorization_when_logged_out() {
    let client = ApiClient::new(config(), AuthState::default());
    let request = client.prepare(Method::Get, "/items", None);
    assert_eq!(request.header("Authorization"), None);
    assert!(request.headers.iter().all(|(k, _)| !k.eq_ignore_ascii_case("authorization")));
}

#[test]
fn prepare_sets_json_content_type_only_with_body() {
    let client = ApiClient::new(config(), AuthState::default());
    let with_body = client.prepare(Method::Post, "/items", Some("{}".to_owned()));
    let without_body = client.prepare(Method::Get, "/items", None);
    assert_eq!(with_body.header("content-type"), Some("application/json"));
    assert_eq!(without_body.header("content-type"), None);
}

#[test]
fn prepare_uses_configured_timeout() {
    let client = ApiClient::new(config(), AuthState::default());
    assert_eq!(client.prepare(Method::Delete, "/items/1", None).timeout, Duration::from_secs(60));
    assert_eq!(client.timeout(), Duration::from_secs(60));
}

#[test]
fn client_exposes_base_url() {
    let client = ApiClient::new(config(), AuthState::default());
    assert_eq!(client.base_url(), "http://ifms.local:8000/api");
}

#[test]
fn client_debug_never_prints_token() {
    let client = ApiClient::new(config(), logged_in("secret-token"));
    let debug = format!("{client:?}");
    assert!(debug.contains("ifms.local"));
    assert!(!debug.contains("secret-token"));
}

// =============================================================
// Responses
// =============================================================

#[test]
fn is_success_covers_2xx_only() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(301));
    assert!(!is_success(401));
    assert!(!is_success(500));
}

#[test]
fn api_response_json_decodes_body() {
    let response = ApiResponse { body: r#"{"ok":true}"#.to_owned() };
    let value: serde_json::Value = response.json().unwrap();
    assert_eq!(value["ok"], serde_json::json!(true));
}

#[test]
fn api_response_json_reports_decode_error() {
    let response = ApiResponse { body: "not json".to_owned() };
    assert!(matches!(response.json::<serde_json::Value>(), Err(ClientError::Decode(_))));
}

#[test]
fn method_names_are_uppercase() {
    assert_eq!(Method::Delete.to_string(), "DELETE");
    assert_eq!(Method::Get.as_str(), "GET");
}

// =============================================================
// Transport helpers off-browser
// =============================================================

#[test]
fn send_is_unavailable_off_browser() {
    let client = ApiClient::new(config(), logged_in("T"));
    let request = client.prepare(Method::Get, "/items", None);
    assert_eq!(ready(client.send(request)), Err(ClientError::Unavailable));
}

#[test]
fn typed_helpers_are_unavailable_off_browser() {
    let client = ApiClient::new(config(), logged_in("T"));
    let body = serde_json::json!({"title": "leak"});

    assert_eq!(ready(client.get_json::<serde_json::Value>("/items")), Err(ClientError::Unavailable));
    assert_eq!(
        ready(client.post_json::<_, serde_json::Value>("/items", &body)),
        Err(ClientError::Unavailable)
    );
    assert_eq!(
        ready(client.put_json::<_, serde_json::Value>("/items/1", &body)),
        Err(ClientError::Unavailable)
    );
    assert_eq!(ready(client.delete("/items/1")), Err(ClientError::Unavailable));
}

#[test]
fn login_is_unavailable_off_browser() {
    let client = ApiClient::new(config(), AuthState::default());
    let credentials = LoginRequest { username: "alice".to_owned(), password: "123456".to_owned() };
    assert_eq!(ready(client.login(&credentials)), Err(ClientError::Unavailable));
}

#[test]
fn post_json_reports_unencodable_body_before_sending() {
    let client = ApiClient::new(config(), AuthState::default());
    let mut body = HashMap::new();
    body.insert((1, 2), "tuple keys are not JSON object keys");

    let result = ready(client.post_json::<_, serde_json::Value>("/items", &body));
    assert!(matches!(result, Err(ClientError::Encode(_))), "got {result:?}");
}

#[test]
fn put_json_reports_unencodable_body_before_sending() {
    let client = ApiClient::new(config(), AuthState::default());
    let mut body = HashMap::new();
    body.insert(vec![1], 1);

    let result = ready(client.put_json::<_, serde_json::Value>("/items/1", &body));
    assert!(matches!(result, Err(ClientError::Encode(_))), "got {result:?}");
}
