//! Application state with repository-based storage.
//!
//! The state handed to every request handler. It holds the contact repository
//! as a trait object so the backend is chosen once at startup.

use std::sync::Arc;

use contactbook_core::storage::ContactRepository;

use crate::config::{Config, StorageBackend};
use crate::storage::InMemoryRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Contact repository.
    pub contact_repo: Arc<dyn ContactRepository>,
}

impl AppState {
    /// Creates a new AppState around an existing repository.
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repo }
    }

    /// Creates the state for the backend selected in the configuration.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let contact_repo: Arc<dyn ContactRepository> = match config.storage {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory contact storage");
                Arc::new(InMemoryRepository::new())
            }
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite => {
                tracing::info!(path = %config.sqlite_path, "Using SQLite contact storage");
                Arc::new(crate::storage::SqliteRepository::new(&config.sqlite_path).await?)
            }
            #[cfg(not(feature = "sqlite"))]
            StorageBackend::Sqlite => {
                anyhow::bail!("SQLite storage requested but the 'sqlite' feature is disabled")
            }
        };

        Ok(Self::new(contact_repo))
    }
}

impl Default for AppState {
    /// Creates an empty in-memory state, mostly useful for tests.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
