//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::config::MetricsConfig;

/// Label used for requests that did not match any route
const UNMATCHED_PATH: &str = "unmatched";

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
    path: String,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("hdb_resale_predictor_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
                path: config.path.clone(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics) -> Router {
    let path = metrics.path().to_string();

    Router::new()
        .route(&path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric.
///
/// `route` is the matched route template, or `None` when nothing matched.
pub fn record_http_request(method: &str, route: Option<&str>, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", route_label(route)),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Result of a single price prediction, as reported to metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionOutcome {
    Success,
    InvalidInput,
    ModelUnavailable,
    InferenceFailed,
}

impl PredictionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::InvalidInput => "invalid_input",
            Self::ModelUnavailable => "model_unavailable",
            Self::InferenceFailed => "inference_failed",
        }
    }
}

/// Record a prediction attempt
pub fn record_prediction(outcome: PredictionOutcome, duration: Duration) {
    let labels = [("outcome", outcome.as_str())];

    counter!("predictions_total", &labels).increment(1);
    histogram!("prediction_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Record a model artifact load from disk
pub fn record_model_load(success: bool) {
    let outcome = if success { "success" } else { "error" };

    counter!("model_loads_total", "outcome" => outcome).increment(1);
}

/// Unmatched paths collapse into one label to bound cardinality
fn route_label(route: Option<&str>) -> String {
    route.unwrap_or(UNMATCHED_PATH).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_label_uses_template() {
        assert_eq!(route_label(Some("/v1/predictions")), "/v1/predictions");
    }

    #[test]
    fn test_route_label_collapses_unmatched() {
        assert_eq!(route_label(None), "unmatched");
    }

    #[test]
    fn test_prediction_outcome_labels() {
        assert_eq!(PredictionOutcome::Success.as_str(), "success");
        assert_eq!(PredictionOutcome::InvalidInput.as_str(), "invalid_input");
        assert_eq!(PredictionOutcome::ModelUnavailable.as_str(), "model_unavailable");
        assert_eq!(PredictionOutcome::InferenceFailed.as_str(), "inference_failed");
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_http_request("GET", Some("/health"), 200, Duration::from_millis(3));
        record_prediction(PredictionOutcome::Success, Duration::from_millis(1));
        record_model_load(false);
    }

    #[test]
    fn test_init_metrics_disabled() {
        let config = MetricsConfig {
            enabled: false,
            path: "/metrics".to_string(),
        };

        assert!(init_metrics(&config).is_none());
    }
}
