//! Remote authentication service trait definition.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Client for the remote authentication service.
///
/// Every call has two failure channels: an `Err` for transport-level failures
/// (the call rejected), and an in-band `error` field on the returned payload
/// for application-level failures (bad credentials, duplicate user, ...).
/// Callers handle both, and each auth operation does so differently.
#[async_trait]
pub trait RemoteAuthClient: Send + Sync {
    /// Verifies credentials.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse>;

    /// Fetches the full profile (including access token) for a user.
    async fn search_user(&self, username: &str) -> Result<UserProfileResponse>;

    /// Creates a new account.
    async fn register_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse>;

    /// Changes the current user's password.
    async fn update_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<UpdatePasswordResponse>;
}

/// Returns the in-band error message, if the field carries a failure.
///
/// The service signals "no error" with either a missing field or an empty
/// string.
fn in_band_error(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|message| !message.is_empty())
}

/// Response of the credential check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Any other fields the service sends along; never read by the stores.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LoginResponse {
    pub fn error_message(&self) -> Option<&str> {
        in_band_error(&self.error)
    }

    /// Creates a response carrying an in-band failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Creates a successful response with the given token.
    pub fn accepted(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }
}

/// Full user profile returned by the user lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub token: String,
}

/// Response of account creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<RegisteredUser>,
}

impl RegisterResponse {
    pub fn error_message(&self) -> Option<&str> {
        in_band_error(&self.error)
    }

    /// Creates a response carrying an in-band failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            user: None,
        }
    }

    /// Creates a successful response for the given user.
    pub fn created(user: RegisteredUser) -> Self {
        Self {
            error: None,
            user: Some(user),
        }
    }
}

/// User payload embedded in a successful registration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Response of a password change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePasswordResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UpdatePasswordResponse {
    pub fn error_message(&self) -> Option<&str> {
        in_band_error(&self.error)
    }

    /// Creates a response carrying an in-band failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

/// User ids come back as JSON strings from some endpoints and as numbers from
/// others.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}
