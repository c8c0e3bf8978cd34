use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown storage backend '{0}', expected 'sqlite' or 'memory'")]
    UnknownStorage(String),
}

/// Which repository implementation backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" | "mem" | "inmemory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::UnknownStorage(other.to_string())),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage backend (default: sqlite)
    pub storage: StorageBackend,
    /// Path to SQLite database file (default: "contactbook.db")
    pub sqlite_path: String,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STORAGE` - `sqlite` or `memory` (default: sqlite)
    /// - `SQLITE_PATH` - SQLite database path (default: "contactbook.db")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage = match env::var("STORAGE") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::Sqlite,
        };

        Ok(Self {
            storage,
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "contactbook.db".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Memory,
            sqlite_path: "contactbook.db".to_string(),
            request_timeout_seconds: 10,
        }
    }
}
