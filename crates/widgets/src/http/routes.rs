//! Widget routes for the dev server.
//!
//! Path and query parameters are turned into the same typed requests the
//! Lambda adapters build, then handed to `crate::handlers`.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};

use widgets_core::widget::{
    ColorQueryRequest, FilterPageRequest, FilterPageResponse, GetWidgetRequest, PutWidgetRequest,
    Widget, WidgetError,
};

use super::AppError;
use crate::{context::WidgetContext, handlers};

/// GET /widget/{name}
pub async fn get_widget(
    State(ctx): State<WidgetContext>,
    Path(name): Path<String>,
) -> Result<Json<Widget>, AppError> {
    let widget = handlers::get_widget(&ctx, &GetWidgetRequest::new(name)).await?;
    Ok(Json(widget))
}

/// PUT /widget with a `{ "name", "color" }` JSON body.
pub async fn put_widget(
    State(ctx): State<WidgetContext>,
    payload: Result<Json<PutWidgetRequest>, JsonRejection>,
) -> Result<Json<Widget>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| WidgetError::InvalidInput(rejection.body_text()))?;

    let widget = handlers::put_widget(&ctx, &request).await?;
    Ok(Json(widget))
}

/// GET /reports/color/{color}
pub async fn widgets_by_color(
    State(ctx): State<WidgetContext>,
    Path(color): Path<String>,
) -> Result<Json<Vec<Widget>>, AppError> {
    let widgets = handlers::widgets_by_color(&ctx, &ColorQueryRequest::new(color)).await?;
    Ok(Json(widgets))
}

/// GET /reports/filterpage?limit=&lastkey=&filter=
pub async fn filter_page(
    State(ctx): State<WidgetContext>,
    Query(request): Query<FilterPageRequest>,
) -> Result<Json<FilterPageResponse>, AppError> {
    let page = handlers::filter_page(&ctx, &request).await?;
    Ok(Json(page))
}
