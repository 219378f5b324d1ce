use thiserror::Error;

/// Errors reported by a [`WidgetStore`](super::WidgetStore) backend.
///
/// Handlers never branch on the variant: every store error is an upstream
/// fault. The variants exist so the detail that gets logged is useful.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request throttled: {0}")]
    Throttled(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
