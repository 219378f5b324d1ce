//! Incoming Lambda event normalization.
//!
//! Handlers are invoked either with a flat payload rendered by an API
//! gateway mapping template, or with a proxy event. Both end up as one flat
//! JSON object that deserializes into the handler's request type.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use widgets_core::widget::WidgetError;

/// Keys that only appear on an API gateway proxy event.
const PROXY_KEYS: [&str; 4] = [
    "requestContext",
    "pathParameters",
    "queryStringParameters",
    "body",
];

/// Flattens an incoming event into a single JSON object.
///
/// A mapping-template payload is returned unchanged. For a proxy event the
/// query string parameters, the JSON body and the path parameters are
/// merged in that order, so path parameters win on conflicting names.
pub fn normalize_event(event: Value) -> Result<Value, WidgetError> {
    let Value::Object(object) = event else {
        return Err(WidgetError::InvalidInput(
            "Request payload must be a JSON object".to_string(),
        ));
    };

    if !PROXY_KEYS.iter().any(|key| object.contains_key(*key)) {
        return Ok(Value::Object(object));
    }

    let mut merged = Map::new();
    merge_object(&mut merged, object.get("queryStringParameters"));
    merge_object(&mut merged, parse_body(object.get("body"))?.as_ref());
    merge_object(&mut merged, object.get("pathParameters"));

    Ok(Value::Object(merged))
}

/// Normalizes an event and deserializes it into a handler request.
pub fn parse_request<T: DeserializeOwned>(event: Value) -> Result<T, WidgetError> {
    let payload = normalize_event(event)?;
    serde_json::from_value(payload)
        .map_err(|e| WidgetError::InvalidInput(format!("Malformed request: {e}")))
}

fn merge_object(target: &mut Map<String, Value>, source: Option<&Value>) {
    if let Some(Value::Object(fields)) = source {
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
    }
}

fn parse_body(body: Option<&Value>) -> Result<Option<Value>, WidgetError> {
    let parsed = match body {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(text)) if text.trim().is_empty() => return Ok(None),
        Some(Value::String(text)) => serde_json::from_str(text)
            .map_err(|e| WidgetError::InvalidInput(format!("Malformed JSON body: {e}")))?,
        Some(other) => other.clone(),
    };

    match parsed {
        Value::Object(_) => Ok(Some(parsed)),
        _ => Err(WidgetError::InvalidInput(
            "Request body must be a JSON object".to_string(),
        )),
    }
}
