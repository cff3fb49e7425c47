use super::*;
use crate::net::types::AuthUser;
use crate::state::auth::AuthSession;

fn session() -> AuthSession {
    AuthSession {
        token: "tok".to_owned(),
        user: AuthUser {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            image: None,
            created_at: None,
        },
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_session_missing() {
    let state = AuthState { session: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { session: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let state = AuthState { session: Some(session()), loading: false };
    assert!(!should_redirect_unauth(&state));
}
