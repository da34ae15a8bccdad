//! HttpAuthClient - REST implementation of the remote authentication client.
//!
//! Talks to the anime search backend's auth endpoints over `reqwest`.

use crate::config::ClientConfig;
use anisearch_core::auth::{
    LoginResponse, LogoutListener, RegisterResponse, RemoteAuthClient, UpdatePasswordResponse,
    UserProfileResponse,
};
use anisearch_core::error::{AnisearchError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;

const LOGIN_PATH: &str = "/api/auth/login";
const SEARCH_USER_PATH: &str = "/api/users/search";
const REGISTER_PATH: &str = "/api/auth/register";
const UPDATE_PASSWORD_PATH: &str = "/api/auth/password";

/// Remote auth client that talks to the backend's REST API.
///
/// JSON bodies are handed back to the caller whatever the HTTP status, so a
/// `400 {"error": "..."}` reaches the stores as an in-band error. Only
/// transport failures and non-JSON error bodies become `Err`.
///
/// The client remembers the most recent access token it has seen and sends it
/// as a bearer token on password changes.
#[derive(Clone)]
pub struct HttpAuthClient {
    client: Client,
    base_url: String,
    bearer_token: Arc<RwLock<Option<String>>>,
}

impl HttpAuthClient {
    /// Creates a new client for the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a client from the loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Replaces the bearer token, e.g. with the one from a restored session.
    pub async fn set_bearer_token(&self, token: Option<String>) {
        *self.bearer_token.write().await = token.filter(|t| !t.is_empty());
    }

    pub async fn bearer_token(&self) -> Option<String> {
        self.bearer_token.read().await.clone()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn remember_token(&self, token: Option<&str>) {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            *self.bearer_token.write().await = Some(token.to_string());
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &str,
    ) -> Result<T> {
        let response = request.send().await.map_err(|err| {
            AnisearchError::remote(
                err.status().map(|s| s.as_u16()),
                format!("{} request failed: {}", operation, err),
            )
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            AnisearchError::remote(
                Some(status.as_u16()),
                format!("Failed to read {} response: {}", operation, err),
            )
        })?;

        decode_body(status, &body, operation)
    }
}

/// Decodes a response body, keeping in-band JSON errors in-band.
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str, operation: &str) -> Result<T> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(_) if !status.is_success() => {
            let message = if body.trim().is_empty() {
                format!("{} failed with HTTP {}", operation, status)
            } else {
                format!("{} failed with HTTP {}: {}", operation, status, body.trim())
            };
            Err(AnisearchError::remote(Some(status.as_u16()), message))
        }
        Err(err) => Err(AnisearchError::Serialization {
            format: "JSON".to_string(),
            message: format!("Failed to parse {} response: {}", operation, err),
        }),
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePasswordRequest<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

#[async_trait]
impl RemoteAuthClient for HttpAuthClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let request = self
            .client
            .post(self.endpoint(LOGIN_PATH))
            .json(&LoginRequest { username, password });

        self.send_json(request, "login").await
    }

    async fn search_user(&self, username: &str) -> Result<UserProfileResponse> {
        let request = self
            .client
            .get(self.endpoint(SEARCH_USER_PATH))
            .query(&[("username", username)]);

        let profile: UserProfileResponse = self.send_json(request, "searchUser").await?;
        self.remember_token(Some(&profile.token)).await;
        Ok(profile)
    }

    async fn register_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse> {
        let request = self
            .client
            .post(self.endpoint(REGISTER_PATH))
            .json(&RegisterRequest {
                username,
                email,
                password,
            });

        let response: RegisterResponse = self.send_json(request, "registerUser").await?;
        if let Some(user) = &response.user {
            self.remember_token(user.token.as_deref()).await;
        }
        Ok(response)
    }

    async fn update_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<UpdatePasswordResponse> {
        let mut request = self
            .client
            .put(self.endpoint(UPDATE_PASSWORD_PATH))
            .json(&UpdatePasswordRequest {
                old_password,
                new_password,
            });

        if let Some(token) = self.bearer_token().await {
            request = request.bearer_auth(token);
        }

        self.send_json(request, "updatePassword").await
    }
}

/// Forgets the remembered token so the next user never sends it.
#[async_trait]
impl LogoutListener for HttpAuthClient {
    fn on_logout(&self) {}

    async fn after_logout(&self) {
        self.set_bearer_token(None).await;
        tracing::debug!("[HttpAuthClient] Cleared bearer token");
    }
}
