//! Session and authentication state models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The authenticated user's cached identity and access token.
///
/// Field names on the wire (`user_id`, `username`, `email`, `token`) match the
/// documents already written by the web client into durable storage.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Server-side user identifier
    pub user_id: String,
    pub username: String,
    pub email: String,
    /// Access token; empty when the service did not issue one
    #[serde(default)]
    pub token: String,
}

impl Session {
    /// Creates a new session from profile fields.
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            email: email.into(),
            token: token.into(),
        }
    }

    /// Returns true if the service issued an access token for this session.
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

// The token never shows up in logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("token", &if self.has_token() { "<redacted>" } else { "" })
            .finish()
    }
}

/// State held by the auth store.
///
/// Logged-in status is derived from session presence, so the two can never
/// disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    /// Creates a logged-out state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a logged-in state for the given session.
    pub fn logged_in(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

/// Result of a login attempt.
///
/// Login never raises: bad credentials and transport failures both collapse
/// into [`LoginOutcome::Error`], and the caller only learns that
/// authentication did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum LoginOutcome {
    Success,
    Error,
}

impl LoginOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// The sentinel string the web client returns on failure.
    pub fn as_sentinel(self) -> Option<&'static str> {
        match self {
            Self::Success => None,
            Self::Error => Some("error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_logged_out() {
        let state = AuthState::default();
        assert!(!state.is_logged_in());
        assert!(state.session().is_none());
    }

    #[test]
    fn test_logged_in_state() {
        let state = AuthState::logged_in(Session::new("u-1", "alice", "a@example.com", "tok"));
        assert!(state.is_logged_in());
        assert_eq!(state.session().map(|s| s.username.as_str()), Some("alice"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::new("u-1", "alice", "a@example.com", "secret-token");
        let rendered = format!("{:?}", session);
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("alice"));
    }

    #[test]
    fn test_missing_token_deserializes_empty() {
        let session: Session = serde_json::from_str(
            r#"{"user_id":"7","username":"bob","email":"b@example.com"}"#,
        )
        .unwrap();
        assert_eq!(session.token, "");
        assert!(!session.has_token());
    }

    #[test]
    fn test_login_outcome_sentinel() {
        assert_eq!(LoginOutcome::Error.as_sentinel(), Some("error"));
        assert_eq!(LoginOutcome::Success.as_sentinel(), None);
        assert!(LoginOutcome::Success.is_success());
    }
}
