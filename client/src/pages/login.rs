//! Standalone sign-in page; the redirect target for protected routes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::DASHBOARD_PATH;
use crate::components::auth_modal::AuthPanel;
use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Already signed in, or just signed in through the panel.
    Effect::new(move || {
        if auth.with(|a| !a.loading && a.session.is_some()) {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <AuthPanel on_success=Callback::new(|()| ())/>
            </div>
        </div>
    }
}
