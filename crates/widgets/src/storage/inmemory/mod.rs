//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of `WidgetStore` that
//! keeps records in a key-ordered map wrapped in `Arc<RwLock<_>>`. It backs
//! the handler tests and the dev server's `--in-memory` mode.
//!
//! # Example
//!
//! ```rust,ignore
//! use widgets::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new("pk").with_failure_after(2);
//! // Use store for testing...
//! ```

mod repository;

pub use repository::InMemoryStore;
