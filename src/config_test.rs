use super::*;

// =============================================================
// Base URL
// =============================================================

#[test]
fn base_url_uses_page_protocol_and_hostname_on_port_8000() {
    let cfg = ApiConfig::for_location(&PageLocation::new("https:", "ifms.example.com"));
    assert_eq!(cfg.base_url, "https://ifms.example.com:8000/api");
}

#[test]
fn base_url_ignores_page_port() {
    // hostname never carries the page's own port
    let cfg = ApiConfig::for_location(&PageLocation::new("http:", "192.168.1.20"));
    assert_eq!(cfg.base_url, "http://192.168.1.20:8000/api");
}

#[test]
fn default_timeout_is_sixty_seconds() {
    let cfg = ApiConfig::for_location(&PageLocation::new("http:", "localhost"));
    assert_eq!(cfg.timeout, Duration::from_secs(60));
}

#[test]
fn current_location_off_browser_is_localhost() {
    assert_eq!(PageLocation::current(), PageLocation::new("http:", "localhost"));
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn parse_port_defaults_when_missing_or_blank() {
    assert_eq!(parse_port(None).unwrap(), 8000);
    assert_eq!(parse_port(Some("  ")).unwrap(), 8000);
}

#[test]
fn parse_port_accepts_valid_value() {
    assert_eq!(parse_port(Some("9000")).unwrap(), 9000);
}

#[test]
fn parse_port_rejects_zero_and_garbage() {
    assert!(matches!(parse_port(Some("0")), Err(ClientError::Config(_))));
    assert!(matches!(parse_port(Some("eighty")), Err(ClientError::Config(_))));
    assert!(matches!(parse_port(Some("70000")), Err(ClientError::Config(_))));
}

#[test]
fn parse_timeout_defaults_and_validates() {
    assert_eq!(parse_timeout_secs(None).unwrap(), 60);
    assert_eq!(parse_timeout_secs(Some("15")).unwrap(), 15);
    assert!(matches!(parse_timeout_secs(Some("0")), Err(ClientError::Config(_))));
    assert!(matches!(parse_timeout_secs(Some("-1")), Err(ClientError::Config(_))));
}

#[test]
fn overrides_apply_to_base_url_and_timeout() {
    let cfg = ApiConfig::with_overrides(&PageLocation::new("http:", "host"), 9100, 5);
    assert_eq!(cfg.base_url, "http://host:9100/api");
    assert_eq!(cfg.timeout, Duration::from_secs(5));
}
