//! In-memory storage backend.
//!
//! Keeps every table in a `BTreeMap` behind a single `Arc<RwLock<_>>`, so
//! reference checks and writes happen under one lock. Nothing is persisted.
//!
//! # Example
//!
//! ```rust,ignore
//! use reviewdesk::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
