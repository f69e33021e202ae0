use super::*;

#[test]
fn detail_reads_fastapi_string_detail() {
    let err = ClientError::Status { status: 400, body: r#"{"detail":"bad credentials"}"#.to_owned() };
    assert_eq!(err.detail().as_deref(), Some("bad credentials"));
    assert_eq!(err.user_message(), "bad credentials");
}

#[test]
fn detail_serializes_structured_detail() {
    let err = ClientError::Status { status: 422, body: r#"{"detail":[{"loc":["body","username"]}]}"#.to_owned() };
    assert_eq!(err.detail().as_deref(), Some(r#"[{"loc":["body","username"]}]"#));
}

#[test]
fn detail_is_none_for_non_json_body() {
    let err = ClientError::Status { status: 502, body: "Bad Gateway".to_owned() };
    assert_eq!(err.detail(), None);
    assert_eq!(err.user_message(), "request failed with status 502");
}

#[test]
fn detail_is_none_for_other_variants() {
    assert_eq!(ClientError::Network("offline".to_owned()).detail(), None);
    assert_eq!(ClientError::Unavailable.detail(), None);
}

#[test]
fn timeout_display_names_seconds() {
    assert_eq!(ClientError::Timeout(Duration::from_secs(60)).to_string(), "request timed out after 60s");
}
