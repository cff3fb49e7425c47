use super::*;
use crate::util::session_storage::MemorySession;

fn response() -> AuthResponse {
    AuthResponse {
        token: "tok-123".to_owned(),
        user: AuthUser {
            id: "u-1".to_owned(),
            name: "Mona".to_owned(),
            email: "mona@example.com".to_owned(),
            image: None,
            created_at: Some("2024-03-01T10:00:00Z".to_owned()),
        },
    }
}

// =============================================================
// Session persistence
// =============================================================

#[test]
fn sign_in_stores_token_and_user() {
    let store = MemorySession::new();
    let mut auth = AuthState::default();
    auth.sign_in(response(), &store);

    assert_eq!(store.load(TOKEN_KEY).as_deref(), Some("tok-123"));
    assert_eq!(load_json::<AuthUser>(&store, USER_KEY), Some(response().user));
    assert_eq!(auth.token(), Some("tok-123"));
    assert_eq!(auth.user().map(|u| u.name.as_str()), Some("Mona"));
}

#[test]
fn load_restores_saved_session() {
    let store = MemorySession::new();
    AuthSession::from(response()).save(&store);
    let auth = AuthState::load(&store);
    assert_eq!(auth.session, Some(AuthSession::from(response())));
}

#[test]
fn load_requires_both_keys() {
    let store = MemorySession::new();
    store.save(TOKEN_KEY, "tok");
    assert!(AuthSession::load(&store).is_none());

    let store = MemorySession::new();
    save_json(&store, USER_KEY, &response().user);
    assert!(AuthSession::load(&store).is_none());
}

#[test]
fn load_ignores_malformed_user() {
    let store = MemorySession::new();
    store.save(TOKEN_KEY, "tok");
    store.save(USER_KEY, "{oops");
    assert!(AuthSession::load(&store).is_none());
}

#[test]
fn sign_out_clears_both_keys() {
    let store = MemorySession::new();
    let mut auth = AuthState::default();
    auth.sign_in(response(), &store);
    auth.sign_out(&store);
    assert!(!store.contains(TOKEN_KEY));
    assert!(!store.contains(USER_KEY));
    assert!(auth.session.is_none());
}

// =============================================================
// Social providers
// =============================================================

#[test]
fn social_providers_send_simulated_tokens() {
    let tokens: Vec<_> = SocialProvider::ALL.iter().map(|p| p.request().token).collect();
    assert_eq!(tokens, vec!["google_token", "facebook_token", "apple_token"]);
    assert_eq!(SocialProvider::Apple.request().provider, "apple");
}

#[test]
fn social_failure_uses_api_message_or_provider_fallback() {
    let err = ApiError::new("Account locked");
    assert_eq!(social_failure_message(SocialProvider::Google, &err), "Account locked");
    let blank = ApiError::new("");
    assert_eq!(social_failure_message(SocialProvider::Facebook, &blank), "Failed to login with facebook");
}

#[test]
fn login_and_signup_failures_fall_back() {
    let blank = ApiError::new(" ");
    assert_eq!(login_failure_message(&blank), "Invalid email or password");
    assert_eq!(signup_failure_message(&blank), "Failed to create account");
    assert_eq!(login_failure_message(&ApiError::new("An error occurred")), "An error occurred");
}

// =============================================================
// Stepper
// =============================================================

#[test]
fn initial_view_fans_out_to_login_and_signup() {
    let mut modal = AuthModalState::default();
    assert_eq!(modal.view, AuthView::Initial);
    modal.show_login();
    assert_eq!(modal.view, AuthView::Login);
    modal.back_to_initial();
    modal.show_signup();
    assert_eq!(modal.view, AuthView::Signup(SignupStep::Details));
}

#[test]
fn signup_next_requires_name_and_email() {
    let mut modal = AuthModalState::default();
    modal.show_signup();
    modal.signup.name = "Mona".to_owned();
    modal.signup_next();
    assert_eq!(modal.view, AuthView::Signup(SignupStep::Details));
    assert_eq!(modal.error.as_deref(), Some(DETAILS_REQUIRED_MESSAGE));

    modal.signup.email = "mona@example.com".to_owned();
    modal.signup_next();
    assert_eq!(modal.view, AuthView::Signup(SignupStep::Password));
    assert_eq!(modal.error, None);
}

#[test]
fn signup_back_returns_to_details_keeping_fields() {
    let mut modal = AuthModalState::default();
    modal.signup.name = "Mona".to_owned();
    modal.signup.email = "mona@example.com".to_owned();
    modal.show_signup();
    modal.signup_next();
    modal.signup_back();
    assert_eq!(modal.view, AuthView::Signup(SignupStep::Details));
    assert_eq!(modal.signup.name, "Mona");
}

#[test]
fn back_arrow_from_password_step_goes_to_initial() {
    let mut modal = AuthModalState::default();
    modal.signup.name = "Mona".to_owned();
    modal.signup.email = "m@x.io".to_owned();
    modal.show_signup();
    modal.signup_next();
    modal.back_to_initial();
    assert_eq!(modal.view, AuthView::Initial);
}

#[test]
fn signup_request_rejects_mismatched_passwords() {
    let form = SignupForm {
        name: "Mona".to_owned(),
        email: "mona@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret2".to_owned(),
    };
    assert_eq!(form.request(), Err(PASSWORD_MISMATCH_MESSAGE));

    let ok = SignupForm { confirm_password: "secret1".to_owned(), ..form };
    let req = ok.request().unwrap();
    assert_eq!(req.name, "Mona");
    assert_eq!(req.password, "secret1");
}

#[test]
fn failed_request_keeps_view_and_shows_error() {
    let mut modal = AuthModalState::default();
    assert!(modal.begin_request());
    assert!(!modal.begin_request());
    modal.fail("Failed to login with apple".to_owned());
    assert_eq!(modal.view, AuthView::Initial);
    assert!(!modal.busy);
    assert_eq!(modal.error.as_deref(), Some("Failed to login with apple"));
}

#[test]
fn login_request_trims_email_only() {
    let form = LoginForm { email: " a@b.c ".to_owned(), password: " pw ".to_owned() };
    let req = form.request();
    assert_eq!(req.email, "a@b.c");
    assert_eq!(req.password, " pw ");
}
