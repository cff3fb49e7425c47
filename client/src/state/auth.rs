//! Auth session and the sign-in modal's stepper state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header opens the auth modal; a successful login, signup, or social
//! login stores the session under the `token` and `user` session keys and
//! routes to the dashboard. The dashboard re-verifies the token on entry and
//! clears the session when verification fails.
//!
//! DESIGN
//! ======
//! Views form a small stepper: `Initial` fans out to `Login` or a two-step
//! `Signup`. Transitions and field checks live here so they can be tested
//! without rendering the modal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiError;
use crate::net::types::{AuthResponse, AuthUser, LoginRequest, SignupRequest, SocialLoginRequest};
use crate::util::session_storage::{SessionStore, load_json, save_json};

/// Session storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Session storage key for the JSON-encoded [`AuthUser`].
pub const USER_KEY: &str = "user";

pub const DETAILS_REQUIRED_MESSAGE: &str = "Please fill in your name and email.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";
const LOGIN_FALLBACK_MESSAGE: &str = "Invalid email or password";
const SIGNUP_FALLBACK_MESSAGE: &str = "Failed to create account";

/// Token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    pub token: String,
    pub user: AuthUser,
}

impl From<AuthResponse> for AuthSession {
    fn from(resp: AuthResponse) -> Self {
        Self { token: resp.token, user: resp.user }
    }
}

impl AuthSession {
    /// Read a stored session. Both keys must be present and valid.
    #[must_use]
    pub fn load(store: &impl SessionStore) -> Option<Self> {
        let token = store.load(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let user = load_json::<AuthUser>(store, USER_KEY)?;
        Some(Self { token, user })
    }

    pub fn save(&self, store: &impl SessionStore) {
        store.save(TOKEN_KEY, &self.token);
        save_json(store, USER_KEY, &self.user);
    }

    /// Remove both session keys.
    pub fn clear(store: &impl SessionStore) {
        store.clear(TOKEN_KEY);
        store.clear(USER_KEY);
    }
}

/// Authentication state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<AuthSession>,
    /// True while a token verification is in flight.
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn load(store: &impl SessionStore) -> Self {
        Self { session: AuthSession::load(store), loading: false }
    }

    #[must_use]
    pub fn user(&self) -> Option<&AuthUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Store a fresh session from any successful auth response.
    pub fn sign_in(&mut self, resp: AuthResponse, store: &impl SessionStore) {
        let session = AuthSession::from(resp);
        session.save(store);
        self.session = Some(session);
        self.loading = false;
    }

    /// Drop the session, e.g. on logout or failed verification.
    pub fn sign_out(&mut self, store: &impl SessionStore) {
        AuthSession::clear(store);
        self.session = None;
        self.loading = false;
    }
}

/// Social providers offered on the initial view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Facebook,
    Apple,
}

impl SocialProvider {
    pub const ALL: [Self; 3] = [Self::Google, Self::Facebook, Self::Apple];

    /// Wire name (`provider` field).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
            Self::Apple => "apple",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Facebook => "Facebook",
            Self::Apple => "Apple",
        }
    }

    /// Placeholder token sent until real provider SDKs are wired in.
    #[must_use]
    pub fn simulated_token(self) -> String {
        format!("{}_token", self.name())
    }

    #[must_use]
    pub fn request(self) -> SocialLoginRequest {
        SocialLoginRequest { provider: self.name().to_owned(), token: self.simulated_token() }
    }
}

fn message_or(err: &ApiError, fallback: impl FnOnce() -> String) -> String {
    if err.message.trim().is_empty() { fallback() } else { err.message.clone() }
}

#[must_use]
pub fn social_failure_message(provider: SocialProvider, err: &ApiError) -> String {
    message_or(err, || format!("Failed to login with {}", provider.name()))
}

#[must_use]
pub fn login_failure_message(err: &ApiError) -> String {
    message_or(err, || LOGIN_FALLBACK_MESSAGE.to_owned())
}

#[must_use]
pub fn signup_failure_message(err: &ApiError) -> String {
    message_or(err, || SIGNUP_FALLBACK_MESSAGE.to_owned())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupStep {
    #[default]
    Details,
    Password,
}

/// Which panel of the auth modal is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Initial,
    Login,
    Signup(SignupStep),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    #[must_use]
    pub fn request(&self) -> LoginRequest {
        LoginRequest { email: self.email.trim().to_owned(), password: self.password.clone() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Gate for the first step's Next button.
    ///
    /// # Errors
    ///
    /// Returns the inline message when name or email is blank.
    pub fn check_details(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(DETAILS_REQUIRED_MESSAGE);
        }
        Ok(())
    }

    /// Build the signup request once both passwords agree.
    ///
    /// # Errors
    ///
    /// Returns the inline message for blank details or mismatched passwords.
    pub fn request(&self) -> Result<SignupRequest, &'static str> {
        self.check_details()?;
        if self.password != self.confirm_password {
            return Err(PASSWORD_MISMATCH_MESSAGE);
        }
        Ok(SignupRequest {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        })
    }
}

/// Complete modal state, reset every time the modal opens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthModalState {
    pub view: AuthView,
    pub error: Option<String>,
    pub busy: bool,
    pub login: LoginForm,
    pub signup: SignupForm,
}

impl AuthModalState {
    fn go(&mut self, view: AuthView) {
        self.view = view;
        self.error = None;
    }

    /// "Continue with Email" and the signup form's "Log in" link.
    pub fn show_login(&mut self) {
        self.go(AuthView::Login);
    }

    pub fn show_signup(&mut self) {
        self.go(AuthView::Signup(SignupStep::Details));
    }

    /// Header back arrow: always returns to the initial view.
    pub fn back_to_initial(&mut self) {
        self.go(AuthView::Initial);
    }

    /// Signup Next. Stays on the details step with an error when blank.
    pub fn signup_next(&mut self) {
        match self.signup.check_details() {
            Ok(()) => self.go(AuthView::Signup(SignupStep::Password)),
            Err(msg) => self.error = Some(msg.to_owned()),
        }
    }

    /// Signup Back (password step to details step).
    pub fn signup_back(&mut self) {
        self.go(AuthView::Signup(SignupStep::Details));
    }

    /// Mark a request as started. Returns `false` if one is already running.
    pub fn begin_request(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    /// Record a failed request without changing the view.
    pub fn fail(&mut self, message: String) {
        self.busy = false;
        self.error = Some(message);
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }
}
