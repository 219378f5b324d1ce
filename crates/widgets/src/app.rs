use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    context::WidgetContext,
    http::{filter_page, get_widget, livez, put_widget, widgets_by_color},
};

/// Create the dev server router with all routes and middleware.
pub fn create_app(ctx: WidgetContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/widget", put(put_widget))
        .route("/widget/{name}", get(get_widget))
        .route("/reports/color/{color}", get(widgets_by_color))
        .route("/reports/filterpage", get(filter_page))
        .layer(cors)
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(ctx)
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::mock_data::{demo_config, demo_store};

    fn test_app() -> Router {
        create_app(WidgetContext::in_memory(demo_config(), demo_store()))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let response = test_app()
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_widget() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/widget/TEST001")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["name"], "TEST001");
        assert_eq!(json["color"], "red");
    }

    #[tokio::test]
    async fn test_get_nonexistent_widget() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/widget/NOPE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "NotFound");
    }

    #[tokio::test]
    async fn test_put_then_get_widget() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/widget")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"name": "Super Widget", "color": "Red"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["name"], "Super Widget");
        assert_eq!(json["color"], "Red");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/widget/Super%20Widget")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["color"], "Red");
    }

    #[tokio::test]
    async fn test_put_widget_missing_color() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/widget")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"name": "Super Widget"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "InvalidInput");
    }

    #[tokio::test]
    async fn test_put_widget_malformed_body() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/widget")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_color_report() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/reports/color/blue")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let widgets = json.as_array().unwrap();
        assert!(!widgets.is_empty());
        assert!(widgets.iter().all(|w| w["color"] == "blue"));
    }

    #[tokio::test]
    async fn test_color_report_not_found() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/reports/color/mauve")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_filter_page() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/reports/filterpage?limit=2&lastkey=&filter=")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["metadata"]["count"], 2);
        assert_eq!(json["metadata"]["message"], "OK");
        assert_eq!(json["metadata"]["previous"], "");
        assert_ne!(json["metadata"]["next"], "");
        assert_eq!(json["widgetList"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_filter_page_nothing_matches() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/reports/filterpage?filter=WILLNOTBEFOUND")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
