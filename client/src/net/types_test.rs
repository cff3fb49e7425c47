use super::*;
use crate::state::catalog::product_by_id;

// =============================================================
// Auth responses
// =============================================================

#[test]
fn auth_response_parses_string_id_and_optional_image() {
    let raw = r#"{"token":"t-1","user":{"id":"u-1","name":"Mona","email":"mona@example.com"}}"#;
    let resp: AuthResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "t-1");
    assert_eq!(resp.user.id, "u-1");
    assert_eq!(resp.user.image, None);
    assert_eq!(resp.user.created_at, None);
}

#[test]
fn auth_user_accepts_integer_id() {
    let raw = r#"{"id":42,"name":"Omar","email":"omar@example.com","image":"/a.png"}"#;
    let user: AuthUser = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, "42");
    assert_eq!(user.image.as_deref(), Some("/a.png"));
}

#[test]
fn auth_user_rejects_non_scalar_id() {
    let raw = r#"{"id":{"x":1},"name":"Omar","email":"omar@example.com"}"#;
    assert!(serde_json::from_str::<AuthUser>(raw).is_err());
}

#[test]
fn auth_user_omits_absent_optionals_when_serialized() {
    let user = AuthUser {
        id: "u-1".to_owned(),
        name: "Mona".to_owned(),
        email: "mona@example.com".to_owned(),
        image: None,
        created_at: None,
    };
    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("image").is_none());
    assert!(json.get("created_at").is_none());
}

#[test]
fn error_response_tolerates_missing_fields() {
    let parsed: ErrorResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, ErrorResponse::default());

    let parsed: ErrorResponse = serde_json::from_str(r#"{"message":"Invalid credentials","code":"AUTH_001"}"#).unwrap();
    assert_eq!(parsed.message.as_deref(), Some("Invalid credentials"));
    assert_eq!(parsed.code.as_deref(), Some("AUTH_001"));
}

// =============================================================
// Requests
// =============================================================

#[test]
fn social_login_request_shape() {
    let req = SocialLoginRequest { provider: "google".to_owned(), token: "google_token".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"provider": "google", "token": "google_token"})
    );
}

#[test]
fn contact_submission_uses_camel_case_and_gov_key() {
    let submission = ContactSubmission {
        first_name: "Ali".to_owned(),
        last_name: "Hassan".to_owned(),
        email: "ali@example.com".to_owned(),
        phone: "0100".to_owned(),
        address: "1 Nile St".to_owned(),
        gov: "Giza".to_owned(),
        message: "Hello".to_owned(),
        units: vec![product_by_id(2).unwrap()],
    };
    let json = serde_json::to_value(&submission).unwrap();
    assert_eq!(json["firstName"], "Ali");
    assert_eq!(json["lastName"], "Hassan");
    assert_eq!(json["gov"], "Giza");
    assert_eq!(json["units"][0]["id"], 2);
    assert_eq!(json["units"][0]["price"], "$350");
}
