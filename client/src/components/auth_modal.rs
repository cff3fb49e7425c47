//! Sign-in modal: social providers, email login, and two-step signup.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthPanel`] owns the stepper and the API calls; it is rendered inside
//! [`AuthModal`] from the header and directly on the `/login` page. On any
//! successful auth the session is stored, the panel reports success, and the
//! caller decides where to go next.
//!
//! INVARIANTS
//! ==========
//! - While the modal is mounted the page underneath is locked; the lock is
//!   an RAII guard released on unmount, whatever path closes the modal.
//! - A failed request never changes the current step.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::DASHBOARD_PATH;
use crate::state::auth::{AuthModalState, AuthState, AuthView, SignupStep, SocialProvider};
#[cfg(feature = "hydrate")]
use crate::state::auth::{login_failure_message, signup_failure_message, social_failure_message};
use crate::state::ui::UiState;
use crate::util::page_lock::{LockMode, PageLock};
#[cfg(feature = "hydrate")]
use crate::util::session_storage::BrowserSession;

/// Store a successful response, or record the failure message inline.
#[cfg(feature = "hydrate")]
fn settle(
    outcome: Result<crate::net::types::AuthResponse, crate::net::api::ApiError>,
    failure: impl FnOnce(&crate::net::api::ApiError) -> String,
    auth: RwSignal<AuthState>,
    panel: RwSignal<AuthModalState>,
    on_success: Callback<()>,
) {
    match outcome {
        Ok(resp) => {
            auth.update(|a| a.sign_in(resp, &BrowserSession));
            panel.update(AuthModalState::finish);
            on_success.run(());
        }
        Err(e) => {
            log::warn!("auth request failed: {e}");
            panel.update(|p| p.fail(failure(&e)));
        }
    }
}

/// Begin a request, returning `false` when one is already in flight.
fn begin(panel: RwSignal<AuthModalState>) -> bool {
    let mut started = false;
    panel.update(|p| started = p.begin_request());
    started
}

#[component]
pub fn AuthPanel(on_success: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let panel = RwSignal::new(AuthModalState::default());

    let view_kind = move || panel.with(|p| p.view);
    let busy = move || panel.with(|p| p.busy);

    let on_social = move |provider: SocialProvider| {
        if !begin(panel) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::social_login(&provider.request()).await;
            settle(outcome, |e| social_failure_message(provider, e), auth, panel, on_success);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (provider, auth, on_success);
        }
    };

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !begin(panel) {
            return;
        }
        let request = panel.with_untracked(|p| p.login.request());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::login(&request).await;
            settle(outcome, login_failure_message, auth, panel, on_success);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let on_signup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match panel.with_untracked(|p| p.signup.request()) {
            Ok(request) => request,
            Err(msg) => {
                panel.update(|p| p.error = Some(msg.to_owned()));
                return;
            }
        };
        if !begin(panel) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::signup(&request).await;
            settle(outcome, signup_failure_message, auth, panel, on_success);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let title = move || match view_kind() {
        AuthView::Initial => "Welcome to ASMA",
        AuthView::Login => "Log in",
        AuthView::Signup(_) => "Create account",
    };

    view! {
        <div class="auth-panel">
            <header class="auth-panel__header">
                <Show when=move || view_kind() != AuthView::Initial>
                    <button
                        class="auth-panel__back"
                        aria-label="Back"
                        on:click=move |_| panel.update(AuthModalState::back_to_initial)
                    >
                        "←"
                    </button>
                </Show>
                <h2>{title}</h2>
            </header>

            {move || match view_kind() {
                AuthView::Initial => {
                    view! {
                        <div class="auth-panel__initial">
                            {SocialProvider::ALL
                                .iter()
                                .map(|provider| {
                                    let provider = *provider;
                                    view! {
                                        <button
                                            class="auth-panel__social"
                                            disabled=busy
                                            on:click=move |_| on_social(provider)
                                        >
                                            {provider.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                            <div class="auth-panel__divider">"or"</div>
                            <button class="auth-panel__primary" on:click=move |_| panel.update(AuthModalState::show_login)>
                                "Continue with Email"
                            </button>
                            <p class="auth-panel__switch">
                                "Don't have an account? "
                                <button class="auth-panel__link" on:click=move |_| panel.update(AuthModalState::show_signup)>
                                    "Sign up"
                                </button>
                            </p>
                        </div>
                    }
                        .into_any()
                }
                AuthView::Login => {
                    view! {
                        <form class="auth-panel__form" on:submit=on_login>
                            <input
                                type="email"
                                placeholder="Email"
                                required
                                prop:value=move || panel.with(|p| p.login.email.clone())
                                on:input=move |ev| panel.update(|p| p.login.email = event_target_value(&ev))
                            />
                            <input
                                type="password"
                                placeholder="Password"
                                required
                                prop:value=move || panel.with(|p| p.login.password.clone())
                                on:input=move |ev| panel.update(|p| p.login.password = event_target_value(&ev))
                            />
                            <button class="auth-panel__primary" type="submit" disabled=busy>
                                {move || if busy() { "Logging in..." } else { "Log in" }}
                            </button>
                            <p class="auth-panel__switch">
                                "New here? "
                                <button
                                    type="button"
                                    class="auth-panel__link"
                                    on:click=move |_| panel.update(AuthModalState::show_signup)
                                >
                                    "Create an account"
                                </button>
                            </p>
                        </form>
                    }
                        .into_any()
                }
                AuthView::Signup(SignupStep::Details) => {
                    view! {
                        <div class="auth-panel__form">
                            <input
                                type="text"
                                placeholder="Full name"
                                prop:value=move || panel.with(|p| p.signup.name.clone())
                                on:input=move |ev| panel.update(|p| p.signup.name = event_target_value(&ev))
                            />
                            <input
                                type="email"
                                placeholder="Email"
                                prop:value=move || panel.with(|p| p.signup.email.clone())
                                on:input=move |ev| panel.update(|p| p.signup.email = event_target_value(&ev))
                            />
                            <button class="auth-panel__primary" on:click=move |_| panel.update(AuthModalState::signup_next)>
                                "Next"
                            </button>
                            <p class="auth-panel__switch">
                                "Already have an account? "
                                <button class="auth-panel__link" on:click=move |_| panel.update(AuthModalState::show_login)>
                                    "Log in"
                                </button>
                            </p>
                        </div>
                    }
                        .into_any()
                }
                AuthView::Signup(SignupStep::Password) => {
                    view! {
                        <form class="auth-panel__form" on:submit=on_signup>
                            <input
                                type="password"
                                placeholder="Password"
                                required
                                prop:value=move || panel.with(|p| p.signup.password.clone())
                                on:input=move |ev| panel.update(|p| p.signup.password = event_target_value(&ev))
                            />
                            <input
                                type="password"
                                placeholder="Confirm password"
                                required
                                prop:value=move || panel.with(|p| p.signup.confirm_password.clone())
                                on:input=move |ev| panel.update(|p| p.signup.confirm_password = event_target_value(&ev))
                            />
                            <div class="auth-panel__actions">
                                <button type="button" on:click=move |_| panel.update(AuthModalState::signup_back)>
                                    "Back"
                                </button>
                                <button class="auth-panel__primary" type="submit" disabled=busy>
                                    {move || if busy() { "Creating account..." } else { "Sign up" }}
                                </button>
                            </div>
                        </form>
                    }
                        .into_any()
                }
            }}

            {move || {
                panel
                    .with(|p| p.error.clone())
                    .map(|msg| view! { <p class="auth-panel__error" role="alert">{msg}</p> })
            }}
        </div>
    }
}

/// Modal wrapper around [`AuthPanel`], opened from the header.
#[component]
pub fn AuthModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let lock = PageLock::acquire(LockMode::Interaction);
    on_cleanup(move || drop(lock));

    let close = move || ui.update(UiState::close_auth_modal);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    });
    let signed_in = RwSignal::new(false);
    let on_success = Callback::new(move |()| signed_in.set(true));
    Effect::new(move || {
        if signed_in.get() {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
            close();
        }
    });

    view! {
        <div class="dialog-backdrop" style="pointer-events: auto;" on:click=move |_| close()>
            <div
                class="dialog dialog--auth"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <button class="dialog__close" aria-label="Close" on:click=move |_| close()>
                    "✕"
                </button>
                <AuthPanel on_success=on_success/>
            </div>
        </div>
    }
}
