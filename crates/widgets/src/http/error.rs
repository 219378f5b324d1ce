use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use widgets_core::widget::{widget_error_body, widget_error_to_status_code, WidgetError};

/// Handler error rendered through the widget status mapping.
///
/// The body is `{ "error": <kind>, "message": <sanitized message> }`.
#[derive(Debug)]
pub struct AppError(pub WidgetError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = widget_error_to_status_code(&self.0);
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(widget_error_body(&self.0))).into_response()
    }
}

impl From<WidgetError> for AppError {
    fn from(err: WidgetError) -> Self {
        Self(err)
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use widgets_core::storage::StoreError;

    use super::*;

    #[tokio::test]
    async fn test_upstream_error_body_is_sanitized() {
        let err = AppError(WidgetError::Upstream(StoreError::ConnectionFailed(
            "10.0.0.1 refused".to_string(),
        )));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "UpstreamError");
        assert_eq!(json["message"], "Internal Server Error");
    }

    #[test]
    fn test_invalid_input_status() {
        let response = AppError(WidgetError::InvalidInput("name is required".to_string()))
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
