//! Liveness endpoint.
//!
//! - `/livez` - Basic liveness check (immediate 200, no checks)

use axum::http::StatusCode;

/// GET /livez - Basic liveness check.
///
/// Returns 200 immediately. Does not touch the store.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
