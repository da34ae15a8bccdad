use std::sync::Arc;

use anisearch_application::{AuthStore, SearchStore};
use anisearch_core::storage::PersistenceAdapter;
use anisearch_infrastructure::{ClientConfig, FilePersistenceAdapter, HttpAuthClient};
use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt};

/// Everything a command needs, wired and hydrated.
pub struct AppBootstrap {
    pub auth: AuthStore,
    pub search: Arc<SearchStore>,
}

impl AppBootstrap {
    /// Loads config, installs logging, and hydrates both stores from disk.
    pub async fn init() -> Result<Self> {
        let config = ClientConfig::load().context("Failed to load configuration")?;
        init_logging(&config);

        let storage_dir = config
            .resolve_storage_dir()
            .context("Failed to resolve storage directory")?;
        tracing::debug!("[Bootstrap] Using storage directory {:?}", storage_dir);

        let adapter: Arc<dyn PersistenceAdapter> =
            Arc::new(FilePersistenceAdapter::new(storage_dir));
        let client = Arc::new(HttpAuthClient::from_config(&config));

        let search = Arc::new(SearchStore::hydrate(adapter.clone()).await);
        let auth = AuthStore::hydrate(client.clone(), adapter)
            .await
            .with_logout_listener(search.clone())
            .with_logout_listener(client.clone());

        // The restored session's token authorizes follow-up calls.
        client
            .set_bearer_token(auth.session().map(|session| session.token))
            .await;

        Ok(Self { auth, search })
    }
}

/// `RUST_LOG` wins; otherwise the configured level applies.
fn init_logging(config: &ClientConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
