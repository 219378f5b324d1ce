//! Table deployment operations (Imperative Shell).

use std::time::Duration;

use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, CreateGlobalSecondaryIndexAction, GlobalSecondaryIndex,
    GlobalSecondaryIndexUpdate, KeySchemaElement, KeyType, Projection, ProjectionType,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use super::client;
use super::config::{ColorIndex, TableConfig};
use super::error::{DynamodbError, Result};
use super::planning::{DeployPlan, DestroyPlan};

const ACTIVATION_ATTEMPTS: u32 = 60;
const ACTIVATION_DELAY: Duration = Duration::from_secs(2);

/// Execute a deploy plan.
pub async fn execute_deploy_plan(client: &Client, plan: &DeployPlan) -> Result<()> {
    match plan {
        DeployPlan::CreateTable { config } => {
            create_table(client, config).await?;
            wait_for_table_active(client, &config.table_name).await
        }
        DeployPlan::AddColorIndex { table_name, index } => {
            add_color_index(client, table_name, index).await?;
            wait_for_table_active(client, table_name).await
        }
        DeployPlan::KeyMismatch {
            table_name,
            existing,
            desired,
        } => Err(DynamodbError::KeyMismatch {
            table_name: table_name.clone(),
            existing: existing.clone(),
            desired: desired.clone(),
        }),
        DeployPlan::NoChanges { .. } => Ok(()),
    }
}

/// Execute a destroy plan.
pub async fn execute_destroy_plan(client: &Client, plan: &DestroyPlan) -> Result<()> {
    if let DestroyPlan::DeleteTable { table_name } = plan {
        client
            .delete_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(sdk_error)?;
    }
    Ok(())
}

async fn create_table(client: &Client, config: &TableConfig) -> Result<()> {
    let index = &config.color_index;
    let mut definitions = vec![string_attribute(&config.key_attr)?];
    for name in [&index.partition_key, &index.sort_key] {
        if !definitions.iter().any(|d| d.attribute_name() == name.as_str()) {
            definitions.push(string_attribute(name)?);
        }
    }

    let color_index = GlobalSecondaryIndex::builder()
        .index_name(&index.name)
        .set_key_schema(Some(index_key_schema(index)?))
        .projection(project_all())
        .build()
        .map_err(sdk_error)?;

    client
        .create_table()
        .table_name(&config.table_name)
        .key_schema(key_element(&config.key_attr, KeyType::Hash)?)
        .set_attribute_definitions(Some(definitions))
        .global_secondary_indexes(color_index)
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .map_err(sdk_error)?;

    Ok(())
}

async fn add_color_index(client: &Client, table_name: &str, index: &ColorIndex) -> Result<()> {
    let action = CreateGlobalSecondaryIndexAction::builder()
        .index_name(&index.name)
        .set_key_schema(Some(index_key_schema(index)?))
        .projection(project_all())
        .build()
        .map_err(sdk_error)?;

    client
        .update_table()
        .table_name(table_name)
        .attribute_definitions(string_attribute(&index.partition_key)?)
        .attribute_definitions(string_attribute(&index.sort_key)?)
        .global_secondary_index_updates(
            GlobalSecondaryIndexUpdate::builder().create(action).build(),
        )
        .send()
        .await
        .map_err(sdk_error)?;

    Ok(())
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    for _ in 0..ACTIVATION_ATTEMPTS {
        let state = client::get_table_state(client, table_name).await?;
        if state.is_some_and(|s| s.active) {
            return Ok(());
        }
        tokio::time::sleep(ACTIVATION_DELAY).await;
    }

    Err(DynamodbError::TableActivationTimeout)
}

fn index_key_schema(index: &ColorIndex) -> Result<Vec<KeySchemaElement>> {
    Ok(vec![
        key_element(&index.partition_key, KeyType::Hash)?,
        key_element(&index.sort_key, KeyType::Range)?,
    ])
}

fn key_element(name: &str, key_type: KeyType) -> Result<KeySchemaElement> {
    KeySchemaElement::builder()
        .attribute_name(name)
        .key_type(key_type)
        .build()
        .map_err(sdk_error)
}

fn string_attribute(name: &str) -> Result<AttributeDefinition> {
    AttributeDefinition::builder()
        .attribute_name(name)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(sdk_error)
}

fn project_all() -> Projection {
    Projection::builder()
        .projection_type(ProjectionType::All)
        .build()
}

fn sdk_error(err: impl std::fmt::Display) -> DynamodbError {
    DynamodbError::AwsSdk(err.to_string())
}
