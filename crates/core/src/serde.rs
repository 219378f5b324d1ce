//! Serde helper functions for gateway payloads.
//!
//! API gateway mapping templates render absent query parameters as empty
//! strings, and some clients send page sizes as JSON numbers.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional scalar as a string, treating empty strings as None.
/// Accepts strings and numbers; `null` is treated as missing.
pub fn deserialize_optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}
