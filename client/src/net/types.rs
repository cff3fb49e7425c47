//! Wire DTOs for the external auth API and the contact endpoint.
//!
//! DESIGN
//! ======
//! Field names follow the JSON the remote services speak (camelCase), so the
//! structs can be sent and received with plain serde derives.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::catalog::Product;

/// `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/signup` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// `POST /auth/social-login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLoginRequest {
    /// Lowercase provider name (`"google"`, `"facebook"`, `"apple"`).
    pub provider: String,
    pub token: String,
}

/// Authenticated user as returned by every auth endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar URL, if the provider supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// ISO 8601 account creation timestamp, if the API reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Successful auth response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

/// Error body returned by the auth API on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// `POST /api/contact` body: the reservation form plus the selected units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Governorate label, e.g. `"Cairo"`.
    pub gov: String,
    pub message: String,
    pub units: Vec<Product>,
}

/// Accept ids sent either as JSON strings or integers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) if n.is_u64() || n.is_i64() => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
