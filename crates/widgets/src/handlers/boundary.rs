//! Outer error boundary shared by the widget handlers.

use widgets_core::widget::{Result, WidgetError};

/// Logs a failed handler result and hands it back unchanged.
///
/// Store faults are logged with their detail at `error`; the returned
/// `WidgetError::Upstream` only displays the sanitized message. Client-side
/// failures are logged at `warn`.
pub(crate) fn log_outcome<T>(operation: &'static str, result: Result<T>) -> Result<T> {
    match &result {
        Err(WidgetError::Upstream(source)) => {
            tracing::error!(operation, error = %source, "Store call failed");
        }
        Err(err) => {
            tracing::warn!(operation, kind = err.kind(), message = %err, "Request rejected");
        }
        Ok(_) => {}
    }
    result
}
