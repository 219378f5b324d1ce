//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `WidgetStore` trait
//! defined in `widgets_core::storage`. The implementations are selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory` (default): ordered in-memory backend for tests and the dev server
//!
//! Both backends may be enabled at the same time. The Lambda binaries only
//! need `dynamodb`.
//!
//! # Examples
//!
//! Build only the Lambda binaries:
//! ```bash
//! cargo build -p widgets --no-default-features --features dynamodb
//! ```

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p widgets --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStore;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryStore;
