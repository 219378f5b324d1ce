//! Rendering handler results as API gateway responses.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use widgets_core::storage::StoreError;
use widgets_core::widget::{widget_error_body, widget_error_to_status_code, WidgetError};

/// Response shape understood by API gateway Lambda integrations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Renders a handler result: 200 with the JSON payload, or the mapped error status.
pub fn render<T: Serialize>(result: Result<T, WidgetError>) -> ApiGatewayResponse {
    match result {
        Ok(payload) => success_response(200, &payload),
        Err(err) => error_response(&err),
    }
}

fn success_response(status_code: u16, payload: &impl Serialize) -> ApiGatewayResponse {
    match serde_json::to_string(payload) {
        Ok(body) => ApiGatewayResponse {
            status_code,
            headers: json_headers(),
            body,
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response payload");
            error_response(&WidgetError::Upstream(StoreError::InvalidData(
                e.to_string(),
            )))
        }
    }
}

/// Renders a failure as `{ "error": <kind>, "message": <sanitized message> }`.
pub fn error_response(err: &WidgetError) -> ApiGatewayResponse {
    let body = widget_error_body(err);
    ApiGatewayResponse {
        status_code: widget_error_to_status_code(err),
        headers: json_headers(),
        body: json!({ "error": body.error, "message": body.message }).to_string(),
    }
}

fn json_headers() -> Value {
    json!({"Content-Type": "application/json"})
}

#[cfg(test)]
mod tests {
    use widgets_core::widget::{FilterPageResponse, Widget};

    use super::*;

    #[test]
    fn test_success_renders_payload() {
        let response = render(Ok(Widget::new("TEST001", "blue")));

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers["Content-Type"], "application/json");

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, json!({"name": "TEST001", "color": "blue"}));
    }

    #[test]
    fn test_page_body_uses_wire_names() {
        let page = FilterPageResponse::new(vec![Widget::new("FOO", "yellow")], None, None);
        let response = render(Ok(page));

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["metadata"]["count"], 1);
        assert_eq!(body["metadata"]["next"], "");
        assert_eq!(body["widgetList"][0]["name"], "FOO");
    }

    #[test]
    fn test_error_statuses() {
        let cases = [
            (WidgetError::InvalidInput("name is required".to_string()), 400),
            (WidgetError::NotFound("No widgets found".to_string()), 404),
            (
                WidgetError::Upstream(StoreError::Throttled("slow down".to_string())),
                500,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(render::<Widget>(Err(err)).status_code, status);
        }
    }

    #[test]
    fn test_upstream_body_hides_store_detail() {
        let response = render::<Widget>(Err(WidgetError::Upstream(
            StoreError::ConnectionFailed("dynamodb.us-east-1 unreachable".to_string()),
        )));

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "UpstreamError");
        assert_eq!(body["message"], "Internal Server Error");
        assert!(!response.body.contains("unreachable"));
    }

    #[test]
    fn test_response_serializes_status_code_field() {
        let response = render(Ok(Widget::new("TEST001", "blue")));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["statusCode"], 200);
    }
}
