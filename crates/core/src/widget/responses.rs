use serde::{Deserialize, Serialize};

use super::types::Widget;

/// Message reported with every successful page.
pub const PAGE_OK_MESSAGE: &str = "OK";

/// Paging metadata returned alongside a scanned page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Cursor to pass as `lastKey` for the following page, or `""` when the scan is done.
    pub next: String,
    /// The `lastKey` this page was requested with, or `""`.
    pub previous: String,
    pub message: String,
    pub count: usize,
}

/// One page of widgets from the paginated scan handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPageResponse {
    pub metadata: PageMetadata,
    #[serde(rename = "widgetList")]
    pub widget_list: Vec<Widget>,
}

impl FilterPageResponse {
    /// Builds a page, deriving `count` from the widgets.
    pub fn new(widgets: Vec<Widget>, next: Option<String>, previous: Option<String>) -> Self {
        Self {
            metadata: PageMetadata {
                next: next.unwrap_or_default(),
                previous: previous.unwrap_or_default(),
                message: PAGE_OK_MESSAGE.to_string(),
                count: widgets.len(),
            },
            widget_list: widgets,
        }
    }
}

/// Body rendered for a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}
