use thiserror::Error;

use crate::storage::StoreError;

/// Failure kinds a widget handler can report.
///
/// `Upstream` displays as a generic message. The store detail is only
/// reachable through [`std::error::Error::source`] and must be logged, never
/// rendered to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal Server Error")]
    Upstream(#[from] StoreError),
}

impl WidgetError {
    /// Stable tag for the error kind, used in rendered error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            WidgetError::InvalidInput(_) => "InvalidInput",
            WidgetError::NotFound(_) => "NotFound",
            WidgetError::Upstream(_) => "UpstreamError",
        }
    }
}

/// Result type for widget handlers.
pub type Result<T> = std::result::Result<T, WidgetError>;
