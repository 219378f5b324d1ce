//! Single-widget handlers: get by name and upsert.

use widgets_core::storage::{KeyLookup, RecordUpdate, StoreError};
use widgets_core::widget::{
    validation::{validate_get, validate_put},
    GetWidgetRequest, PutWidgetRequest, Result, Widget, WidgetError,
};

use super::boundary::log_outcome;
use crate::context::WidgetContext;

/// Fetch one widget by name.
///
/// Fails with `NotFound` when no record carries the name.
pub async fn get_widget(ctx: &WidgetContext, request: &GetWidgetRequest) -> Result<Widget> {
    tracing::info!(name = ?request.name, "Received get widget request");
    log_outcome("get_widget", get_widget_impl(ctx, request).await)
}

async fn get_widget_impl(ctx: &WidgetContext, request: &GetWidgetRequest) -> Result<Widget> {
    let name = validate_get(request)?;

    let lookup = KeyLookup {
        key_attr: ctx.config.key_attr.clone(),
        value: name.to_string(),
        limit: 1,
    };
    let records = ctx.store.get_by_key(&lookup).await?;

    let record = records
        .first()
        .ok_or_else(|| WidgetError::NotFound(format!("Widget '{name}' does not exist")))?;

    Ok(ctx.config.record_to_widget(record)?)
}

/// Create or overwrite a widget's color.
///
/// Returns the widget as written; the store is not re-read.
pub async fn put_widget(ctx: &WidgetContext, request: &PutWidgetRequest) -> Result<Widget> {
    tracing::info!(name = ?request.name, color = ?request.color, "Received put widget request");
    log_outcome("put_widget", put_widget_impl(ctx, request).await)
}

async fn put_widget_impl(ctx: &WidgetContext, request: &PutWidgetRequest) -> Result<Widget> {
    let widget = validate_put(request)?;
    let record = ctx.config.widget_to_record(&widget);

    let update = RecordUpdate::from_record(&ctx.config.key_attr, &record).ok_or_else(|| {
        StoreError::InvalidData(format!("Record has no '{}' attribute", ctx.config.key_attr))
    })?;
    ctx.store.upsert(&update).await?;

    tracing::info!(name = %widget.name, color = %widget.color, "Upserted widget");
    Ok(ctx.config.record_to_widget(&record)?)
}
