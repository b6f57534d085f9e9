use std::path::Path;

use axum::{
    http::Uri,
    middleware,
    routing::get,
    Router,
};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, metrics_middleware};
use super::state::AppState;
use super::types::ApiError;
use super::v1;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// The self-contained prediction form inside the static directory
const FORM_PAGE: &str = "index.html";

/// Create the API router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/v1", v1::create_v1_router())
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}

/// API router plus the form from `static_dir` at `/` and, when enabled, the metrics endpoint
pub fn create_app_router(
    state: AppState,
    metrics: Option<PrometheusMetrics>,
    static_dir: &Path,
) -> Router {
    let router = Router::new()
        .route_service("/", ServeFile::new(static_dir.join(FORM_PAGE)))
        .merge(create_router_with_state(state));

    match metrics {
        Some(metrics) => router.merge(create_metrics_router(metrics)),
        None => router,
    }
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::prediction::MockModelSource;
    use crate::domain::{DomainError, RegressionModel};
    use crate::infrastructure::model::ModelArtifact;

    fn state_with_model(log_price: f64) -> AppState {
        let mut source = MockModelSource::new();
        source.expect_load().returning(move || {
            let model: Arc<dyn RegressionModel> =
                Arc::new(ModelArtifact::linear(vec![0.0; 10], log_price));
            Ok(model)
        });
        source
            .expect_location()
            .return_const("memory".to_string());
        AppState::from_model_source(Arc::new(source))
    }

    fn state_without_model() -> AppState {
        let mut source = MockModelSource::new();
        source
            .expect_load()
            .returning(|| Err(DomainError::model_load("models/missing.json", "not found")));
        source
            .expect_location()
            .return_const("models/missing.json".to_string());
        AppState::from_model_source(Arc::new(source))
    }

    fn scenario_body() -> Value {
        json!({
            "year": 2020,
            "town": "ANG MO KIO",
            "flat_type": "4 ROOM",
            "floor_area_sqm": 90,
            "flat_model": "Model A",
            "storey_start": 5,
            "storey_end": 8,
            "remaining_lease_years": 70,
            "remaining_lease_months": 3,
            "lease_commence_year": 1995
        })
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_router_with_state(state_with_model(12.0));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_prediction_success() {
        let app = create_router_with_state(state_with_model(f64::ln(455_000.0)));

        let response = app
            .oneshot(post_json("/v1/predictions", &scenario_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));

        let json = body_json(response).await;
        assert_eq!(json["object"], "prediction");
        assert_eq!(json["price"], 455_000);
        assert_eq!(json["currency"], "SGD");
        assert_eq!(json["features"][1], 0.0);
        assert_eq!(json["features"][4], 8.0);
    }

    #[tokio::test]
    async fn test_unknown_town_is_bad_request() {
        let mut source = MockModelSource::new();
        source.expect_load().never();
        let app = create_router_with_state(AppState::from_model_source(Arc::new(source)));

        let mut body = scenario_body();
        body["town"] = json!("NON-EXISTENT");

        let response = app.oneshot(post_json("/v1/predictions", &body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["type"], "invalid_request_error");
        assert_eq!(json["error"]["param"], "town");
        assert_eq!(json["error"]["code"], "invalid_category_value");
    }

    #[tokio::test]
    async fn test_out_of_range_floor_area_is_bad_request() {
        let app = create_router_with_state(state_with_model(12.0));

        let mut body = scenario_body();
        body["floor_area_sqm"] = json!(500);

        let response = app.oneshot(post_json("/v1/predictions", &body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["param"], "floor_area_sqm");
    }

    #[tokio::test]
    async fn test_missing_model_is_service_unavailable() {
        let app = create_router_with_state(state_without_model());

        let response = app
            .oneshot(post_json("/v1/predictions", &scenario_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "model_load_error");
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_envelope() {
        let app = create_router_with_state(state_with_model(12.0));

        let request = Request::builder()
            .method("POST")
            .uri("/v1/predictions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"year\": "))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "json_parse_error");
    }

    #[tokio::test]
    async fn test_categories_endpoint() {
        let app = create_router_with_state(state_with_model(12.0));

        let response = app
            .oneshot(Request::builder().uri("/v1/categories").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"][1]["values"][3]["label"], "4 ROOM");
        assert_eq!(json["data"][1]["values"][3]["code"], 3);
    }

    #[tokio::test]
    async fn test_ready_reflects_model_availability() {
        let ready = create_router_with_state(state_with_model(12.0))
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(ready.status(), StatusCode::OK);

        let not_ready = create_router_with_state(state_without_model())
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(not_ready.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = body_json(not_ready).await;
        assert_eq!(json["status"], "unhealthy");
        assert_eq!(json["checks"][0]["name"], "model");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found_envelope() {
        let app = create_router_with_state(state_with_model(12.0));

        let response = app
            .oneshot(Request::builder().uri("/v2/anything").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["type"], "not_found_error");
    }

    #[tokio::test]
    async fn test_app_router_serves_form() {
        let static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let app = create_app_router(state_with_model(12.0), None, &static_dir);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("Predict the Price"));
    }

    #[tokio::test]
    async fn test_app_router_with_missing_static_dir_still_serves_api() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_app_router(state_with_model(12.0), None, dir.path());

        let form = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(form.status(), StatusCode::NOT_FOUND);

        let health = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);
    }
}
