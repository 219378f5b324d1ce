//! Lambda function: Return one page of the widget table.

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use widgets::context::WidgetContext;
use widgets::handlers;
use widgets::lambda::{self, ApiGatewayResponse};
use widgets_core::widget::FilterPageRequest;

async fn handle_request(
    ctx: &WidgetContext,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Invocation started");

    let response = match lambda::parse_request::<FilterPageRequest>(event.payload) {
        Ok(request) => lambda::render(handlers::filter_page(ctx, &request).await),
        Err(err) => lambda::error_response(&err),
    };

    tracing::info!(status = response.status_code, "Invocation finished");
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda::init_tracing();

    let ctx = WidgetContext::from_env().await?;
    let ctx = &ctx;

    lambda_runtime::run(service_fn(move |event| async move {
        handle_request(ctx, event).await
    }))
    .await
}
