#![allow(dead_code)]

use anisearch_application::{AuthStore, SearchStore};
use anisearch_core::auth::{
    LoginResponse, RegisterResponse, RegisteredUser, RemoteAuthClient, UpdatePasswordResponse,
    UserProfileResponse,
};
use anisearch_core::error::{AnisearchError, Result};
use anisearch_core::storage::PersistenceAdapter;
use anisearch_infrastructure::InMemoryPersistenceAdapter;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::{Notify, watch};

/// Scripted remote auth client.
///
/// Defaults to every call succeeding; individual responses can be replaced.
pub struct MockAuthClient {
    pub login_response: Mutex<Result<LoginResponse>>,
    pub profile_response: Mutex<Result<UserProfileResponse>>,
    pub register_response: Mutex<Result<RegisterResponse>>,
    pub update_password_response: Mutex<Result<UpdatePasswordResponse>>,
    calls: Mutex<Vec<String>>,
}

impl MockAuthClient {
    pub fn new() -> Self {
        Self {
            login_response: Mutex::new(Ok(LoginResponse::accepted("login-token"))),
            profile_response: Mutex::new(Ok(alice_profile())),
            register_response: Mutex::new(Ok(RegisterResponse::created(RegisteredUser {
                id: "u-2".to_string(),
                username: "bob".to_string(),
                email: "bob@example.com".to_string(),
                token: Some("register-token".to_string()),
            }))),
            update_password_response: Mutex::new(Ok(UpdatePasswordResponse::default())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_login(&self, response: Result<LoginResponse>) {
        *self.login_response.lock().unwrap() = response;
    }

    pub fn set_profile(&self, response: Result<UserProfileResponse>) {
        *self.profile_response.lock().unwrap() = response;
    }

    pub fn set_register(&self, response: Result<RegisterResponse>) {
        *self.register_response.lock().unwrap() = response;
    }

    pub fn set_update_password(&self, response: Result<UpdatePasswordResponse>) {
        *self.update_password_response.lock().unwrap() = response;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

pub fn alice_profile() -> UserProfileResponse {
    UserProfileResponse {
        id: "u-1".to_string(),
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        token: "profile-token".to_string(),
    }
}

pub fn network_down() -> AnisearchError {
    AnisearchError::remote(None, "connection refused")
}

#[async_trait]
impl RemoteAuthClient for MockAuthClient {
    async fn login(&self, _username: &str, _password: &str) -> Result<LoginResponse> {
        self.record("login");
        self.login_response.lock().unwrap().clone()
    }

    async fn search_user(&self, _username: &str) -> Result<UserProfileResponse> {
        self.record("search_user");
        self.profile_response.lock().unwrap().clone()
    }

    async fn register_user(
        &self,
        _username: &str,
        _email: &str,
        _password: &str,
    ) -> Result<RegisterResponse> {
        self.record("register_user");
        self.register_response.lock().unwrap().clone()
    }

    async fn update_password(
        &self,
        _old_password: &str,
        _new_password: &str,
    ) -> Result<UpdatePasswordResponse> {
        self.record("update_password");
        self.update_password_response.lock().unwrap().clone()
    }
}

/// Adapter whose writes always fail.
pub struct FailingAdapter;

#[async_trait]
impl PersistenceAdapter for FailingAdapter {
    async fn load(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn save(&self, _key: &str, _value: String) -> Result<()> {
        Err(AnisearchError::storage("disk full"))
    }
}

/// Adapter whose writes can be held open to simulate slow storage.
///
/// Reads are never gated. Writes started while the gate is closed wait until
/// [`GatedAdapter::open`] and then land in the shared in-memory map.
pub struct GatedAdapter {
    inner: InMemoryPersistenceAdapter,
    open: watch::Sender<bool>,
    held: Notify,
}

impl GatedAdapter {
    pub fn new(inner: InMemoryPersistenceAdapter) -> Self {
        let (open, _) = watch::channel(true);
        Self {
            inner,
            open,
            held: Notify::new(),
        }
    }

    pub fn close(&self) {
        self.open.send_replace(false);
    }

    pub fn open(&self) {
        self.open.send_replace(true);
    }

    /// Waits until a write is parked behind the closed gate.
    pub async fn write_held(&self) {
        self.held.notified().await;
    }
}

#[async_trait]
impl PersistenceAdapter for GatedAdapter {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        self.inner.load(key).await
    }

    async fn save(&self, key: &str, value: String) -> Result<()> {
        let mut gate = self.open.subscribe();
        if !*gate.borrow_and_update() {
            self.held.notify_one();
            let _ = gate.wait_for(|open| *open).await;
        }
        self.inner.save(key, value).await
    }
}

/// Both stores wired together the way the client does it.
pub struct Stores {
    pub auth: AuthStore,
    pub search: Arc<SearchStore>,
}

pub async fn stores(client: Arc<MockAuthClient>, adapter: &InMemoryPersistenceAdapter) -> Stores {
    let adapter: Arc<dyn PersistenceAdapter> = Arc::new(adapter.clone());
    let search = Arc::new(SearchStore::hydrate(adapter.clone()).await);
    let auth = AuthStore::hydrate(client, adapter)
        .await
        .with_logout_listener(search.clone());
    Stores { auth, search }
}

/// Both stores over a gated adapter, shareable across spawned tasks.
pub async fn gated_stores(
    client: Arc<MockAuthClient>,
    adapter: Arc<GatedAdapter>,
) -> (Arc<AuthStore>, Arc<SearchStore>) {
    let adapter: Arc<dyn PersistenceAdapter> = adapter;
    let search = Arc::new(SearchStore::hydrate(adapter.clone()).await);
    let auth = AuthStore::hydrate(client, adapter)
        .await
        .with_logout_listener(search.clone());
    (Arc::new(auth), search)
}
