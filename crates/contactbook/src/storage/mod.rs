//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! [`ContactRepository`](contactbook_core::storage::ContactRepository) trait.
//!
//! - `sqlite` (default feature): SQLite backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: always available, used by tests and `STORAGE=memory`

pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
