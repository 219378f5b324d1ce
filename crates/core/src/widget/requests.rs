//! Handler input payloads.
//!
//! Every field is optional at the type level: presence and blankness are
//! checked by [`validation`](super::validation) so that a missing field is an
//! `InvalidInput` failure rather than a deserialization error.

use serde::{Deserialize, Serialize};

use crate::serde::deserialize_optional_scalar;

/// Input for the get-by-key handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetWidgetRequest {
    #[serde(default, alias = "widgetName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GetWidgetRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Input for the put/upsert handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutWidgetRequest {
    #[serde(default, alias = "widgetName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl PutWidgetRequest {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            color: Some(color.into()),
        }
    }
}

/// Input for the query-by-color handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorQueryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ColorQueryRequest {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
        }
    }
}

/// Input for the paginated scan handler.
///
/// `lastKey` and `filter` are kept verbatim; the handler ignores them only
/// when empty, so a whitespace filter is still a substring predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPageRequest {
    /// Requested page size; ignored unless it parses as a positive integer.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<String>,
    /// Primary-key value of the last item of the previous page.
    #[serde(
        default,
        rename = "lastKey",
        alias = "lastkey",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_key: Option<String>,
    /// Substring the primary key must contain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl FilterPageRequest {
    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    pub fn with_last_key(mut self, last_key: impl Into<String>) -> Self {
        self.last_key = Some(last_key.into());
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}
