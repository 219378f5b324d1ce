//! Seed command implementation.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::{AttributeValue, PutRequest, WriteRequest};
use aws_sdk_dynamodb::Client;
use widgets_core::env::COLOR_ATTR;
use widgets_core::widget::Widget;

use super::error::{DynamodbError, Result};

/// Maximum number of items in one BatchWriteItem call.
const BATCH_SIZE: usize = 25;

const DEMO_WIDGETS: [(&str, &str); 8] = [
    ("TEST001", "red"),
    ("TEST002", "blue"),
    ("TEST003", "green"),
    ("TEST004", "purple"),
    ("FOO", "yellow"),
    ("Super Widget", "blue"),
    ("Gizmo", "blue"),
    ("Sprocket", "red"),
];

const COLORS: [&str; 6] = ["red", "blue", "green", "purple", "yellow", "orange"];

/// Demo widgets, padded with generated `WIDGET-NNN` widgets up to `count`.
///
/// The fixed demo set is always included so the report fixtures line up.
pub fn generate_seed_widgets(count: usize) -> Vec<Widget> {
    let mut widgets: Vec<Widget> = DEMO_WIDGETS
        .iter()
        .map(|(name, color)| Widget::new(*name, *color))
        .collect();

    let extra = count.saturating_sub(widgets.len());
    widgets.extend((1..=extra).map(|i| {
        Widget::new(format!("WIDGET-{i:03}"), COLORS[(i - 1) % COLORS.len()])
    }));

    widgets
}

fn widget_to_item(key_attr: &str, widget: &Widget) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (key_attr.to_string(), AttributeValue::S(widget.name.clone())),
        (
            COLOR_ATTR.to_string(),
            AttributeValue::S(widget.color.clone()),
        ),
    ])
}

/// Insert widgets into DynamoDB, returning how many were written.
///
/// Items the service reports back as unprocessed are not retried.
pub async fn seed_widgets(
    client: &Client,
    table_name: &str,
    key_attr: &str,
    widgets: &[Widget],
) -> Result<usize> {
    let mut inserted = 0;

    for chunk in widgets.chunks(BATCH_SIZE) {
        let write_requests = chunk
            .iter()
            .map(|widget| {
                let put = PutRequest::builder()
                    .set_item(Some(widget_to_item(key_attr, widget)))
                    .build()
                    .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
                Ok(WriteRequest::builder().put_request(put).build())
            })
            .collect::<Result<Vec<_>>>()?;

        let output = client
            .batch_write_item()
            .request_items(table_name, write_requests)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        let unprocessed = output
            .unprocessed_items()
            .and_then(|items| items.get(table_name))
            .map_or(0, Vec::len);
        inserted += chunk.len() - unprocessed;
    }

    Ok(inserted)
}
