//! Pure functions for mapping widget errors to HTTP status codes.
//!
//! Transports (Lambda responses, the dev server) render failures through
//! these functions instead of inspecting error messages.

use super::error::WidgetError;
use super::responses::ErrorBody;

/// Maps a [`WidgetError`] to an HTTP status code.
///
/// - `InvalidInput` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Upstream` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use widgets_core::widget::{widget_error_to_status_code, WidgetError};
///
/// let error = WidgetError::NotFound("no data matching query".to_string());
/// assert_eq!(widget_error_to_status_code(&error), 404);
/// ```
pub fn widget_error_to_status_code(error: &WidgetError) -> u16 {
    match error {
        WidgetError::InvalidInput(_) => 400,
        WidgetError::NotFound(_) => 404,
        WidgetError::Upstream(_) => 500,
    }
}

/// Builds the caller-facing body for an error. Never includes store detail.
pub fn widget_error_body(error: &WidgetError) -> ErrorBody {
    ErrorBody {
        error: error.kind().to_string(),
        message: error.to_string(),
    }
}
