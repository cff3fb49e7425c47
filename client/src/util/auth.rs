//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages (the customer dashboard) verify the stored token on entry
//! and apply identical redirect behavior when it is missing or rejected.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::LOGIN_PATH;
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::util::session_storage::BrowserSession;

/// Whether a settled auth state should bounce the visitor to the login page.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.is_none()
}

/// Redirect to the login page whenever auth has settled without a session.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Re-check the stored token with `GET /auth/verify`.
///
/// Success refreshes the stored user; failure clears the session, which in
/// turn trips [`install_unauth_redirect`]. Without a browser there is nothing
/// to verify and the state just settles.
pub fn verify_stored_session(auth: RwSignal<AuthState>) {
    let Some(token) = auth.with_untracked(|a| a.token().map(str::to_owned)) else {
        return;
    };
    auth.update(|a| a.loading = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let store = BrowserSession;
        match crate::net::api::verify_token(&token).await {
            Ok(resp) => auth.update(|a| a.sign_in(resp, &store)),
            Err(e) => {
                log::info!("session verification failed: {e}");
                auth.update(|a| a.sign_out(&store));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        auth.update(|a| a.loading = false);
    }
}
