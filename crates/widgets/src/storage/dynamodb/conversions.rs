//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! store records. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use widgets_core::storage::{ContinuationToken, Record};

/// DynamoDB item representation.
pub type Item = HashMap<String, AttributeValue>;

/// Convert a record to a DynamoDB item. Every attribute is written as a string.
pub fn record_to_item(record: &Record) -> Item {
    record
        .iter()
        .map(|(name, value)| (name.clone(), AttributeValue::S(value.clone())))
        .collect()
}

/// Convert a DynamoDB item to a record.
///
/// Only string attributes are kept. A widget attribute stored with any other
/// type is therefore reported as missing when the record is mapped.
pub fn item_to_record(item: &Item) -> Record {
    item.iter()
        .filter_map(|(name, value)| {
            value
                .as_s()
                .ok()
                .map(|s| (name.clone(), s.to_string()))
        })
        .collect()
}

/// Convert a list of DynamoDB items to records, preserving order.
pub fn items_to_records(items: Option<Vec<Item>>) -> Vec<Record> {
    items
        .unwrap_or_default()
        .iter()
        .map(item_to_record)
        .collect()
}

/// Convert a last-evaluated key to a continuation token.
///
/// An empty key means the read reached the end of the data.
pub fn key_to_token(key: Option<Item>) -> Option<ContinuationToken> {
    key.filter(|k| !k.is_empty())
        .map(|k| ContinuationToken::new(item_to_record(&k)))
}

/// Convert a continuation token back to an exclusive start key.
pub fn token_to_key(token: &ContinuationToken) -> Item {
    record_to_item(token.as_record())
}

/// Builds `#a0, #a1, ...` placeholders and their attribute-name bindings.
///
/// Projected attribute names are always aliased so reserved words such as
/// `name` can be used as attributes.
pub fn projection_expression(attrs: &[String]) -> (String, HashMap<String, String>) {
    let names: HashMap<String, String> = attrs
        .iter()
        .enumerate()
        .map(|(i, attr)| (format!("#a{i}"), attr.clone()))
        .collect();
    let expression = (0..attrs.len())
        .map(|i| format!("#a{i}"))
        .collect::<Vec<_>>()
        .join(", ");

    (expression, names)
}

/// Builds the `SET` clause of an update along with its name and value bindings.
pub fn set_expression(
    set: &[(String, String)],
) -> (String, HashMap<String, String>, HashMap<String, AttributeValue>) {
    let mut names = HashMap::new();
    let mut values = HashMap::new();
    let mut clauses = Vec::with_capacity(set.len());

    for (i, (attr, value)) in set.iter().enumerate() {
        names.insert(format!("#s{i}"), attr.clone());
        values.insert(format!(":s{i}"), AttributeValue::S(value.clone()));
        clauses.push(format!("#s{i} = :s{i}"));
    }

    (format!("SET {}", clauses.join(", ")), names, values)
}
