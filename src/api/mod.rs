//! IoTWatch REST API
//!
//! HTTP API layer for IoTWatch, built with Axum.
//!
//! # Endpoints
//!
//! ## Dataset
//! - `GET /api/v1/dataset` - Dataset summary (rows, devices, window count)
//!
//! ## Windows
//! - `GET /api/v1/window/:n` - The n-th window of readings (`?size=S` to override)
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use iotwatch::api::{serve, ApiConfig, AppState};
//! use iotwatch::telemetry::TelemetryDataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(TelemetryDataset::load(Path::new("data/iot_telemetry.csv"))?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/dataset", get(routes::dataset::dataset_summary))
        .route("/window/:n", get(routes::window::get_window));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("IoTWatch API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("IoTWatch API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{SensorRecord, TelemetryDataset};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn test_dataset(rows: usize) -> TelemetryDataset {
        let records = (0..rows)
            .map(|i| SensorRecord {
                ts: 1_594_512_000_000 + (i as i64) * 3_000,
                device: if i % 2 == 0 {
                    "b8:27:eb:bf:9d:51".to_string()
                } else {
                    "00:0f:00:70:91:0a".to_string()
                },
                co: 0.0049,
                humidity: 51.0,
                light: i % 3 == 0,
                lpg: 0.0076,
                motion: false,
                smoke: 0.0204,
                temp: 22.7,
            })
            .collect();
        TelemetryDataset::from_records(records)
    }

    fn create_test_app(rows: usize, chunk_size: usize) -> Router {
        let config = ApiConfig {
            default_chunk_size: chunk_size,
            ..Default::default()
        };
        let state = AppState::new(Arc::new(test_dataset(rows)), config);
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app(40, 15);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_empty_dataset() {
        let app = create_test_app(0, 15);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_dataset_summary() {
        let app = create_test_app(40, 15);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/dataset")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["rows"], 40);
        assert_eq!(json["chunk_size"], 15);
        assert_eq!(json["window_count"], 3);
        assert_eq!(json["devices"].as_array().unwrap().len(), 2);
        assert_eq!(json["poll_interval_ms"], 3000);
    }

    #[tokio::test]
    async fn test_first_window() {
        let app = create_test_app(40, 15);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/window/0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["index"], 0);
        assert_eq!(json["start_row"], 0);
        assert_eq!(json["end_row"], 15);
        assert_eq!(json["last"], false);
        assert_eq!(json["readings"].as_array().unwrap().len(), 15);
        assert_eq!(json["readings"][0]["ts"], 1_594_512_000_000_i64);
        // Calendar timestamp accompanies the epoch one
        assert!(json["readings"][0]["time"]
            .as_str()
            .unwrap()
            .starts_with("2020-07-"));
    }

    #[tokio::test]
    async fn test_final_window_is_short() {
        let app = create_test_app(40, 15);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/window/2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["readings"].as_array().unwrap().len(), 10);
        assert_eq!(json["last"], true);
    }

    #[tokio::test]
    async fn test_exhausted_window_is_404() {
        let app = create_test_app(40, 15);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/window/3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "WINDOW_EXHAUSTED");
    }

    #[tokio::test]
    async fn test_size_override() {
        let app = create_test_app(40, 15);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/window/1?size=25")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["size"], 25);
        assert_eq!(json["start_row"], 25);
        assert_eq!(json["readings"].as_array().unwrap().len(), 15);
    }

    #[tokio::test]
    async fn test_zero_size_rejected() {
        let app = create_test_app(40, 15);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/window/0?size=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
}
