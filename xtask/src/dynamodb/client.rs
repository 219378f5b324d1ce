//! AWS SDK client setup (Imperative Shell).

use aws_sdk_dynamodb::types::{IndexStatus, KeyType, TableStatus};
use aws_sdk_dynamodb::Client;

use super::error::{DynamodbError, Result};
use super::planning::TableState;

/// AWS client configuration.
#[derive(Debug, Clone)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    pub region: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}

impl AwsConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

/// Creates a DynamoDB client with the given configuration.
pub async fn create_client(config: &AwsConfig) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    Client::new(&loader.load().await)
}

/// Fetches current table state, returns None if the table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    let response = match client.describe_table().table_name(table_name).send().await {
        Ok(response) => response,
        Err(err) => {
            let not_found = err
                .as_service_error()
                .is_some_and(|e| e.is_resource_not_found_exception());
            if not_found {
                return Ok(None);
            }
            return Err(DynamodbError::AwsSdk(err.to_string()));
        }
    };

    let Some(table) = response.table() else {
        return Ok(None);
    };

    let key_attr = table
        .key_schema()
        .iter()
        .find(|k| k.key_type() == &KeyType::Hash)
        .map(|k| k.attribute_name().to_string())
        .unwrap_or_default();

    let indexes = table.global_secondary_indexes();
    let indexes_active = indexes
        .iter()
        .all(|gsi| matches!(gsi.index_status(), Some(IndexStatus::Active) | None));

    Ok(Some(TableState {
        key_attr,
        active: table.table_status() == Some(&TableStatus::Active) && indexes_active,
        index_names: indexes
            .iter()
            .filter_map(|gsi| gsi.index_name().map(str::to_string))
            .collect(),
    }))
}
