//! In-memory storage backend.
//!
//! Stores contacts in a `BTreeMap` wrapped in `Arc<RwLock<_>>`, keyed by ID so
//! iteration follows insertion order like the SQLite backend. Data is not
//! persisted.

mod repository;

pub use repository::InMemoryRepository;
