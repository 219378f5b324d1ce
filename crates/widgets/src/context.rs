//! Process-wide handler context.
//!
//! `WidgetContext` is built once at startup and passed by reference to every
//! handler call. It is never mutated after construction.

use std::sync::Arc;

use widgets_core::env::EnvConfig;
use widgets_core::storage::WidgetStore;

/// Immutable configuration plus the store handle shared by all handlers.
#[derive(Clone)]
pub struct WidgetContext {
    pub config: EnvConfig,
    pub store: Arc<dyn WidgetStore>,
}

impl WidgetContext {
    /// Bundles an already-resolved configuration with a store.
    pub fn new(config: EnvConfig, store: Arc<dyn WidgetStore>) -> Self {
        Self { config, store }
    }

    /// Resolves configuration from the environment and connects to DynamoDB.
    ///
    /// Uses the AWS SDK default credential chain. `AWS_ENDPOINT_URL` points
    /// the client at a local DynamoDB when set.
    #[cfg(feature = "dynamodb")]
    pub async fn from_env() -> Result<Self, widgets_core::env::ConfigError> {
        use crate::storage::DynamoDbStore;

        let config = EnvConfig::from_env()?;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Ok(endpoint) = std::env::var("AWS_ENDPOINT_URL") {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;
        let client = aws_sdk_dynamodb::Client::new(&sdk_config);

        tracing::info!(
            table = %config.table_name,
            index = %config.color_index_name,
            default_limit = config.default_limit,
            "Widget context initialized"
        );

        let store = DynamoDbStore::new(client, config.table_name.clone());
        Ok(Self::new(config, Arc::new(store)))
    }

    /// Builds a context backed by an in-memory store.
    #[cfg(feature = "inmemory")]
    pub fn in_memory(config: EnvConfig, store: crate::storage::InMemoryStore) -> Self {
        Self::new(config, Arc::new(store))
    }
}

impl std::fmt::Debug for WidgetContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
