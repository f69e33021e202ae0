use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice  ", "123456"),
        Ok(LoginRequest { username: "alice".to_owned(), password: "123456".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let request = validate_login_input("alice", " pass word ").unwrap();
    assert_eq!(request.password, " pass word ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "123456"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("   ", "123456"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("alice", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn login_failed_message_prefers_backend_detail() {
    let err = ClientError::Status { status: 400, body: r#"{"detail":"用户名或密码错误"}"#.to_owned() };
    assert_eq!(login_failed_message(&err), "Login failed: 用户名或密码错误");
}

#[test]
fn login_failed_message_falls_back_to_error_text() {
    let err = ClientError::Timeout(std::time::Duration::from_secs(60));
    assert_eq!(login_failed_message(&err), "Login failed: request timed out after 60s");
}
