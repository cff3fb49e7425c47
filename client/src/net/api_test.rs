use super::*;

#[test]
fn auth_endpoint_joins_base_and_path() {
    assert_eq!(auth_endpoint("http://localhost:3000/api", "login"), "http://localhost:3000/api/auth/login");
    assert_eq!(auth_endpoint("https://x.test/api", "social-login"), "https://x.test/api/auth/social-login");
}

#[test]
fn normalize_base_strips_trailing_slashes_and_whitespace() {
    assert_eq!(normalize_base(" https://api.example.com/api// "), "https://api.example.com/api");
}

#[test]
fn normalize_base_falls_back_when_blank() {
    assert_eq!(normalize_base("  "), DEFAULT_API_BASE);
}

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!api_base().ends_with('/'));
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn error_from_body_prefers_server_message() {
    let body = ErrorResponse { message: Some("Invalid credentials".to_owned()), code: Some("AUTH_001".to_owned()) };
    let err = error_from_body(Some(body));
    assert_eq!(err.message, "Invalid credentials");
    assert_eq!(err.code.as_deref(), Some("AUTH_001"));
}

#[test]
fn error_from_body_falls_back_to_generic_message() {
    assert_eq!(error_from_body(None).message, GENERIC_ERROR);
    let blank = ErrorResponse { message: Some("   ".to_owned()), code: None };
    assert_eq!(error_from_body(Some(blank)).message, GENERIC_ERROR);
}

#[test]
fn api_error_display_includes_code_when_present() {
    assert_eq!(ApiError::new("Nope").to_string(), "Nope");
    let err = ApiError { message: "Nope".to_owned(), code: Some("E1".to_owned()) };
    assert_eq!(err.to_string(), "Nope (E1)");
}
