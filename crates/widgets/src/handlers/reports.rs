//! Report handlers: every widget of a color, and one filtered scan page.

use widgets_core::storage::{ContinuationToken, IndexQuery, Record, ScanRequest, StoreError};
use widgets_core::widget::{
    validation::{scan_page_size, validate_color},
    ColorQueryRequest, FilterPageRequest, FilterPageResponse, Result, Widget, WidgetError,
};

use super::boundary::log_outcome;
use crate::context::WidgetContext;

/// Return every widget with the requested color, in store order.
///
/// Follows the index continuation until the store reports no more pages.
/// A fault on any page discards everything fetched so far.
pub async fn widgets_by_color(
    ctx: &WidgetContext,
    request: &ColorQueryRequest,
) -> Result<Vec<Widget>> {
    tracing::info!(color = ?request.color, "Received color report request");
    log_outcome("widgets_by_color", widgets_by_color_impl(ctx, request).await)
}

async fn widgets_by_color_impl(
    ctx: &WidgetContext,
    request: &ColorQueryRequest,
) -> Result<Vec<Widget>> {
    let color = validate_color(request)?;

    let query = IndexQuery {
        index_name: ctx.config.color_index_name.clone(),
        key_attr: ctx.config.color_index_key.clone(),
        value: color.to_string(),
        limit: ctx.config.default_limit,
    };

    let mut records = Vec::new();
    let mut start = None;
    let mut pages = 0usize;
    loop {
        let page = ctx.store.query_index(&query, start).await?;
        pages += 1;
        records.extend(page.items);

        match page.continuation {
            Some(token) => start = Some(token),
            None => break,
        }
    }

    tracing::debug!(color, pages, count = records.len(), "Color query exhausted");

    let widgets = to_widgets(ctx, &records)?;
    if widgets.is_empty() {
        return Err(WidgetError::NotFound(format!("No widgets with color '{color}'")));
    }
    Ok(widgets)
}

/// Return one page of a full scan, optionally filtered by name substring.
///
/// `limit` caps the items the store examines; the filter applies after the
/// cap. An empty page is reported as `NotFound`.
pub async fn filter_page(
    ctx: &WidgetContext,
    request: &FilterPageRequest,
) -> Result<FilterPageResponse> {
    tracing::info!(
        limit = ?request.limit,
        last_key = ?request.last_key,
        filter = ?request.filter,
        "Received filter page request"
    );
    log_outcome("filter_page", filter_page_impl(ctx, request).await)
}

async fn filter_page_impl(
    ctx: &WidgetContext,
    request: &FilterPageRequest,
) -> Result<FilterPageResponse> {
    let config = &ctx.config;
    let limit = scan_page_size(request, config.default_limit);

    let mut scan = ScanRequest::new(limit).with_projection(config.widget_projection());
    if let Some(filter) = non_empty(request.filter.as_deref()) {
        scan = scan.with_contains_filter(&config.key_attr, filter);
    }
    let last_key = non_empty(request.last_key.as_deref());
    if let Some(last_key) = last_key {
        scan = scan.with_exclusive_start(ContinuationToken::from_key(&config.key_attr, last_key));
    }

    let page = ctx.store.scan(&scan).await?;
    let widgets = to_widgets(ctx, &page.items)?;
    if widgets.is_empty() {
        return Err(WidgetError::NotFound("No widgets found".to_string()));
    }

    let next = page
        .continuation
        .as_ref()
        .and_then(|token| token.get(&config.key_attr))
        .map(str::to_string);

    Ok(FilterPageResponse::new(
        widgets,
        next,
        last_key.map(str::to_string),
    ))
}

fn to_widgets(
    ctx: &WidgetContext,
    records: &[Record],
) -> std::result::Result<Vec<Widget>, StoreError> {
    records
        .iter()
        .map(|record| ctx.config.record_to_widget(record))
        .collect()
}

/// Only an empty string counts as absent; whitespace is a real value.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
