//! DynamoDB store implementation.
//!
//! Implements `WidgetStore` from `widgets_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use widgets_core::storage::{
    ContinuationToken, IndexQuery, KeyLookup, Page, Record, RecordUpdate, Result, ScanRequest,
    StoreError, WidgetStore,
};

use super::conversions::{
    items_to_records, key_to_token, projection_expression, set_expression, token_to_key,
};
use super::error::{map_query_error, map_scan_error, map_update_item_error};

/// DynamoDB-based store implementation.
///
/// Holds a client and the table name; safe to share across invocations.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

// ============================================================================
// WidgetStore implementation
// ============================================================================

#[async_trait]
impl WidgetStore for DynamoDbStore {
    async fn get_by_key(&self, lookup: &KeyLookup) -> Result<Vec<Record>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("#pk = :v")
            .expression_attribute_names("#pk", &lookup.key_attr)
            .expression_attribute_values(":v", AttributeValue::S(lookup.value.clone()))
            .limit(page_limit(lookup.limit))
            .send()
            .await
            .map_err(map_query_error)?;

        Ok(items_to_records(result.items))
    }

    async fn query_index(
        &self,
        query: &IndexQuery,
        start: Option<ContinuationToken>,
    ) -> Result<Page> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(&query.index_name)
            .key_condition_expression("#k = :v")
            .expression_attribute_names("#k", &query.key_attr)
            .expression_attribute_values(":v", AttributeValue::S(query.value.clone()))
            .limit(page_limit(query.limit))
            .set_exclusive_start_key(start.as_ref().map(token_to_key))
            .send()
            .await
            .map_err(map_query_error)?;

        tracing::debug!(
            index = %query.index_name,
            count = result.count,
            has_more = result.last_evaluated_key.is_some(),
            "Index page fetched"
        );

        Ok(Page {
            items: items_to_records(result.items),
            continuation: key_to_token(result.last_evaluated_key),
        })
    }

    async fn scan(&self, request: &ScanRequest) -> Result<Page> {
        let mut names = HashMap::new();
        let mut values = HashMap::new();

        let projection = if request.projection.is_empty() {
            None
        } else {
            let (expression, projected) = projection_expression(&request.projection);
            names.extend(projected);
            Some(expression)
        };

        let filter = request.filter.as_ref().map(|filter| {
            names.insert("#f".to_string(), filter.attr.clone());
            values.insert(":f".to_string(), AttributeValue::S(filter.value.clone()));
            "contains(#f, :f)".to_string()
        });

        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(page_limit(request.limit))
            .set_projection_expression(projection)
            .set_filter_expression(filter)
            .set_expression_attribute_names((!names.is_empty()).then_some(names))
            .set_expression_attribute_values((!values.is_empty()).then_some(values))
            .set_exclusive_start_key(request.exclusive_start.as_ref().map(token_to_key))
            .send()
            .await
            .map_err(map_scan_error)?;

        tracing::debug!(
            scanned = result.scanned_count,
            count = result.count,
            has_more = result.last_evaluated_key.is_some(),
            "Scan page fetched"
        );

        Ok(Page {
            items: items_to_records(result.items),
            continuation: key_to_token(result.last_evaluated_key),
        })
    }

    async fn upsert(&self, update: &RecordUpdate) -> Result<()> {
        if update.set.is_empty() {
            return Err(StoreError::InvalidData(format!(
                "No attributes to set for '{}'",
                update.key_value
            )));
        }

        let (expression, names, values) = set_expression(&update.set);

        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(&update.key_attr, AttributeValue::S(update.key_value.clone()))
            .update_expression(expression)
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(values))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, &update.key_value))?;

        Ok(())
    }
}

/// DynamoDB rejects a `Limit` of zero.
fn page_limit(limit: u32) -> i32 {
    i32::try_from(limit.max(1)).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_limit() {
        assert_eq!(page_limit(0), 1);
        assert_eq!(page_limit(25), 25);
        assert_eq!(page_limit(u32::MAX), i32::MAX);
    }
}
