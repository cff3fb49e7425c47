//! Customer dashboard: profile, orders, and purchases.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On entry it re-verifies the
//! stored token once; a rejected token clears the session, which trips the
//! shared redirect to `/login`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::LOGIN_PATH;
use crate::net::types::AuthUser;
use crate::state::auth::AuthState;
use crate::util::auth::{install_unauth_redirect, verify_stored_session};
use crate::util::session_storage::BrowserSession;

pub const DEFAULT_AVATAR: &str = "/default-avatar.jpg";

/// Avatar to show for `user`, falling back to the bundled placeholder.
#[must_use]
pub fn avatar_src(user: &AuthUser) -> &str {
    user.image.as_deref().filter(|s| !s.trim().is_empty()).unwrap_or(DEFAULT_AVATAR)
}

/// Calendar date of account creation, or `N/A` when unknown.
#[must_use]
pub fn joined_label(user: &AuthUser) -> String {
    user.created_at
        .as_deref()
        .and_then(|ts| ts.split('T').next())
        .filter(|date| !date.is_empty())
        .map_or_else(|| "N/A".to_owned(), str::to_owned)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let verified = StoredValue::new(false);
    Effect::new(move || {
        let ready = auth.with(|a| !a.loading && a.session.is_some());
        if ready && !verified.get_value() {
            verified.set_value(true);
            verify_stored_session(auth);
        }
    });

    let logged_out = RwSignal::new(false);
    Effect::new(move || {
        if logged_out.get() {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
    let on_logout = move |_| {
        auth.update(|a| a.sign_out(&BrowserSession));
        logged_out.set(true);
    };

    let user = move || auth.with(|a| a.user().cloned());

    view! {
        <div class="dashboard">
            <Show
                when=move || auth.with(|a| !a.loading && a.session.is_some())
                fallback=|| view! { <div class="dashboard__loading" aria-busy="true">"Loading..."</div> }
            >
                {move || {
                    user()
                        .map(|u| {
                            view! {
                                <section class="profile">
                                    <img class="profile__avatar" src=avatar_src(&u).to_owned() alt=u.name.clone()/>
                                    <div class="profile__info">
                                        <h1>{u.name.clone()}</h1>
                                        <p>{u.email.clone()}</p>
                                        <p class="profile__joined">"Member since: " {joined_label(&u)}</p>
                                    </div>
                                    <button class="button" on:click=on_logout>"Logout"</button>
                                </section>
                            }
                        })
                }}
                <section class="dashboard__orders">
                    <h2>"My Orders"</h2>
                    <p class="dashboard__empty">"No orders yet."</p>
                </section>
                <section class="dashboard__purchases">
                    <h2>"Purchased Products"</h2>
                    <p class="dashboard__empty">"No purchased products yet."</p>
                </section>
            </Show>
        </div>
    }
}
