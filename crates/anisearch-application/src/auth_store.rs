//! Authentication store.
//!
//! Owns the current session, runs the login / register / change-password
//! flows against the remote service, and notifies logout listeners so
//! per-user caches are dropped together with the session.
//!
//! Only the session (and its derived logged-in flag) is persisted, under
//! `auth-storage`. Passwords never leave the call that received them.

use crate::binding::StoreBinding;
use anisearch_core::auth::{AuthState, LoginOutcome, LogoutListener, RemoteAuthClient, Session};
use anisearch_core::error::{AnisearchError, Result};
use anisearch_core::storage::{AUTH_STORAGE_KEY, PersistenceAdapter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, watch};

/// Persisted subset of the auth state.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedAuth {
    #[serde(default)]
    user: Option<Session>,
    #[serde(rename = "isLoggedIn", default)]
    is_logged_in: bool,
}

impl From<&AuthState> for PersistedAuth {
    fn from(state: &AuthState) -> Self {
        Self {
            user: state.session.clone(),
            is_logged_in: state.is_logged_in(),
        }
    }
}

impl From<PersistedAuth> for AuthState {
    fn from(persisted: PersistedAuth) -> Self {
        if persisted.is_logged_in != persisted.user.is_some() {
            tracing::warn!(
                "[AuthStore] Stored isLoggedIn={} disagrees with stored user; trusting the user",
                persisted.is_logged_in
            );
        }
        Self {
            session: persisted.user,
        }
    }
}

/// Holds the authenticated session and orchestrates the auth flows.
///
/// Error policies differ per operation:
/// - [`AuthStore::login`] never fails; it reports [`LoginOutcome::Error`].
/// - [`AuthStore::register`] and [`AuthStore::update_password`] return `Err`
///   for both in-band service errors and transport failures.
///
/// Failed operations leave the state untouched.
pub struct AuthStore {
    state: watch::Sender<AuthState>,
    /// Keeps memory and storage updates in the same order.
    write_lock: Mutex<()>,
    client: Arc<dyn RemoteAuthClient>,
    binding: StoreBinding,
    logout_listeners: Vec<Arc<dyn LogoutListener>>,
}

impl AuthStore {
    /// Creates the store, restoring the session from durable storage.
    pub async fn hydrate(
        client: Arc<dyn RemoteAuthClient>,
        adapter: Arc<dyn PersistenceAdapter>,
    ) -> Self {
        let binding = StoreBinding::new(AUTH_STORAGE_KEY, adapter);
        let state: AuthState = binding
            .hydrate::<PersistedAuth>()
            .await
            .map(AuthState::from)
            .unwrap_or_default();

        tracing::debug!(
            "[AuthStore] Hydrated: logged_in={}, user={:?}",
            state.is_logged_in(),
            state.session().map(|s| s.username.as_str())
        );

        let (state, _) = watch::channel(state);
        Self {
            state,
            write_lock: Mutex::new(()),
            client,
            binding,
            logout_listeners: Vec::new(),
        }
    }

    /// Registers a listener that is awaited inside every [`AuthStore::logout`].
    pub fn with_logout_listener(mut self, listener: Arc<dyn LogoutListener>) -> Self {
        self.logout_listeners.push(listener);
        self
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn session(&self) -> Option<Session> {
        self.state.borrow().session.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.borrow().is_logged_in()
    }

    /// Subscribes to auth state changes.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Logs in with the given credentials.
    ///
    /// On success the session is built from the profile lookup, not from the
    /// credential check's response.
    pub async fn login(&self, username: &str, password: &str) -> LoginOutcome {
        match self.authenticate(username, password).await {
            Ok(Some(session)) => {
                tracing::info!("[AuthStore] Logged in as {}", session.username);
                self.commit(AuthState::logged_in(session)).await;
                LoginOutcome::Success
            }
            Ok(None) => LoginOutcome::Error,
            Err(e) => {
                tracing::error!("[AuthStore] Login failed: {}", e);
                LoginOutcome::Error
            }
        }
    }

    /// Returns `Ok(None)` when the service rejected the credentials.
    async fn authenticate(&self, username: &str, password: &str) -> Result<Option<Session>> {
        let response = self.client.login(username, password).await?;
        if let Some(message) = response.error_message() {
            tracing::error!("[AuthStore] Login error: {}", message);
            return Ok(None);
        }

        let profile = self.client.search_user(username).await?;
        Ok(Some(Session::new(
            profile.id,
            profile.username,
            profile.email,
            profile.token,
        )))
    }

    /// Drops the session and resets every registered logout listener.
    ///
    /// Listener memory is reset before the cleared session is published, so
    /// subscribers never see a logged-out user next to per-user data. Their
    /// storage writes complete before this call returns.
    pub async fn logout(&self) {
        {
            let _guard = self.write_lock.lock().await;
            for listener in &self.logout_listeners {
                listener.on_logout();
            }

            let cleared = AuthState::default();
            self.state.send_replace(cleared.clone());
            self.binding.persist(&PersistedAuth::from(&cleared)).await;
        }

        for listener in &self.logout_listeners {
            listener.after_logout().await;
        }

        tracing::info!("[AuthStore] Logged out");
    }

    /// Creates an account and logs straight into it.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<()> {
        match self.create_account(username, email, password).await {
            Ok(session) => {
                tracing::info!("[AuthStore] Registered {}", session.username);
                self.commit(AuthState::logged_in(session)).await;
                Ok(())
            }
            Err(e) => {
                tracing::error!("[AuthStore] Registration failed: {}", e);
                Err(e)
            }
        }
    }

    async fn create_account(&self, username: &str, email: &str, password: &str) -> Result<Session> {
        let response = self.client.register_user(username, email, password).await?;
        if let Some(message) = response.error_message() {
            return Err(AnisearchError::rejected(message));
        }

        let user = response.user.ok_or_else(|| {
            AnisearchError::internal("Registration response did not include a user")
        })?;

        Ok(Session::new(
            user.id,
            user.username,
            user.email,
            user.token.unwrap_or_default(),
        ))
    }

    /// Changes the current user's password.
    ///
    /// The session is left as it is; a token returned by the service is not
    /// adopted.
    pub async fn update_password(&self, old_password: &str, new_password: &str) -> Result<()> {
        let outcome = match self.client.update_password(old_password, new_password).await {
            Ok(response) => match response.error_message() {
                Some(message) => Err(AnisearchError::rejected(message)),
                None => Ok(()),
            },
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {
                tracing::info!("[AuthStore] Password updated");
                // Re-commit whatever is current once the lock is held; a
                // logout that landed meanwhile must stick.
                self.commit_with(AuthState::clone).await;
                Ok(())
            }
            Err(e) => {
                tracing::error!("[AuthStore] Password update failed: {}", e);
                Err(e)
            }
        }
    }

    async fn commit(&self, state: AuthState) {
        self.commit_with(move |_| state).await;
    }

    /// Computes the next state from the current one under the write lock.
    async fn commit_with<F>(&self, update: F)
    where
        F: FnOnce(&AuthState) -> AuthState,
    {
        let _guard = self.write_lock.lock().await;
        let next = {
            let current = self.state.borrow();
            update(&*current)
        };
        let persisted = PersistedAuth::from(&next);
        self.state.send_replace(next);
        self.binding.persist(&persisted).await;
    }
}
