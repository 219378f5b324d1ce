//! AWS Lambda adapters.
//!
//! Each Lambda binary builds a [`WidgetContext`](crate::context::WidgetContext)
//! once, then for every invocation normalizes the event with
//! [`parse_request`], calls a handler and renders the result with [`render`].

mod event;
mod response;

pub use event::{normalize_event, parse_request};
pub use response::{error_response, render, ApiGatewayResponse};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize JSON logging for a Lambda function.
///
/// CloudWatch adds its own timestamps, so none are emitted. The filter
/// defaults to `info` and honours `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .without_time()
                .with_target(false),
        )
        .init();
}
