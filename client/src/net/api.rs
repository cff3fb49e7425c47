//! HTTP helpers for the external auth API and the contact endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Non-2xx auth responses surface
//! the body's `message` (or a generic fallback); transport and decode
//! failures carry the underlying error text. Nothing here panics, so a dead
//! backend degrades to an inline message in the UI.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use super::types::{AuthResponse, ContactSubmission, ErrorResponse, LoginRequest, SignupRequest, SocialLoginRequest};

/// Auth API base used when `KITCHEN_API_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api";

/// Same-origin endpoint receiving reservation requests.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Fallback message when an error response carries no usable `message`.
pub const GENERIC_ERROR: &str = "An error occurred";

/// Error surfaced to the UI: a human-readable message plus optional code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub code: Option<String>,
}

impl ApiError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), code: None }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({code})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Auth API base URL without a trailing slash.
#[must_use]
pub fn api_base() -> String {
    normalize_base(option_env!("KITCHEN_API_URL").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE.to_owned() } else { trimmed.to_owned() }
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(base: &str, path: &str) -> String {
    format!("{base}/auth/{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a (possibly unparseable) error body to an [`ApiError`].
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(body: Option<ErrorResponse>) -> ApiError {
    let body = body.unwrap_or_default();
    let message = body
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_ERROR.to_owned());
    ApiError { message, code: body.code }
}

#[cfg(feature = "hydrate")]
async fn read_auth_response(resp: gloo_net::http::Response) -> Result<AuthResponse, ApiError> {
    if !resp.ok() {
        let body = resp.json::<ErrorResponse>().await.ok();
        return Err(error_from_body(body));
    }
    resp.json::<AuthResponse>().await.map_err(|e| ApiError::new(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_auth<B: serde::Serialize>(path: &str, body: &B) -> Result<AuthResponse, ApiError> {
    let url = auth_endpoint(&api_base(), path);
    let resp = gloo_net::http::Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::new(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::new(e.to_string()))?;
    read_auth_response(resp).await
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::new("not available on server")
}

/// Email/password login via `POST /auth/login`.
///
/// # Errors
///
/// Returns the API's error message on a non-2xx response, or the transport
/// error text if the request could not be made.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_auth("login", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Account creation via `POST /auth/signup`.
///
/// # Errors
///
/// See [`login`].
pub async fn signup(request: &SignupRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_auth("signup", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Provider login via `POST /auth/social-login`.
///
/// # Errors
///
/// See [`login`].
pub async fn social_login(request: &SocialLoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_auth("social-login", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Check a stored session token via `GET /auth/verify`.
///
/// # Errors
///
/// See [`login`]. An expired or unknown token comes back as an error.
pub async fn verify_token(token: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = auth_endpoint(&api_base(), "verify");
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::new(e.to_string()))?;
        read_auth_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(unavailable())
    }
}

/// Deliver a reservation request to `POST /api/contact`.
///
/// Any HTTP response counts as delivered; only failing to build or send the
/// request is an error.
///
/// # Errors
///
/// Returns the transport or serialization error text.
pub async fn submit_contact(submission: &ContactSubmission) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(submission)
            .map_err(|e| ApiError::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::new(e.to_string()))?;
        if !resp.ok() {
            log::warn!("contact endpoint answered {}", resp.status());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        Err(unavailable())
    }
}
