//! Input validation for the widget handlers.
//!
//! Pure functions: each returns the validated values or the
//! `InvalidInput` failure the handler should report.

use super::error::{Result, WidgetError};
use super::requests::{ColorQueryRequest, FilterPageRequest, GetWidgetRequest, PutWidgetRequest};
use super::types::Widget;

/// Returns the value when present and not blank after trimming.
pub fn require_non_blank<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(WidgetError::InvalidInput(format!("{field} is required"))),
    }
}

/// Validates a get request and returns the key to look up.
pub fn validate_get(request: &GetWidgetRequest) -> Result<&str> {
    require_non_blank("name", request.name.as_deref())
}

/// Validates a put request. `name` is checked before `color`.
pub fn validate_put(request: &PutWidgetRequest) -> Result<Widget> {
    let name = require_non_blank("name", request.name.as_deref())?;
    let color = require_non_blank("color", request.color.as_deref())?;
    Ok(Widget::new(name, color))
}

/// Validates a color query and returns the color to match.
///
/// Only a missing or empty color is rejected; the value is used verbatim.
pub fn validate_color(request: &ColorQueryRequest) -> Result<&str> {
    match request.color.as_deref() {
        Some(color) if !color.is_empty() => Ok(color),
        _ => Err(WidgetError::InvalidInput(
            "Malformed path: color is required".to_string(),
        )),
    }
}

/// Effective page size: the requested limit when it is a positive integer,
/// otherwise the configured default.
pub fn resolve_page_size(limit: Option<&str>, default_limit: u32) -> u32 {
    limit
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default_limit)
}

/// Resolves the page size of a scan request against the configured default.
pub fn scan_page_size(request: &FilterPageRequest, default_limit: u32) -> u32 {
    resolve_page_size(request.limit.as_deref(), default_limit)
}
