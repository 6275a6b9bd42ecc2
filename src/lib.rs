//! REST API library for basic arithmetic
//!
//! Provides four GET endpoints under /calc, each taking two numeric query
//! parameters `a` and `b` and returning the result formatted to three
//! decimal places as plain text.

pub mod config;
pub mod dto;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::Config;
pub use dto::OperandsQuery;
pub use response::ApiResponse;
pub use service::{Calculator, FloatCalculator};

// =============================================================================
// Tracing Initialization
// =============================================================================

/// Initialize tracing/logging with the given filter level
pub fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// =============================================================================
// Shared State
// =============================================================================

/// Application state shared across handlers.
///
/// Holds the calculator behind a trait object so tests can swap in a stub
/// without spinning up a different router.
pub struct AppState {
    pub calculator: Arc<dyn Calculator>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            calculator: Arc::new(FloatCalculator),
        }
    }
}

pub type SharedState = Arc<AppState>;

// =============================================================================
// Router
// =============================================================================

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/calc", routes::calc_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// =============================================================================
// Root Endpoints
// =============================================================================

async fn root() -> &'static str {
    "Calculator API - Use /calc/addition, /calc/subtraction, /calc/multiplication or /calc/division"
}

async fn health() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("ok"))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_endpoint() {
        let app = create_router(Arc::new(AppState::default()));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_router(Arc::new(AppState::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_response_success() {
        let response: ApiResponse<&str> = ApiResponse::success("test");
        assert!(response.success);
        assert_eq!(response.data, Some("test"));
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_api_response_error() {
        let response: ApiResponse<()> = ApiResponse::error("test error");
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.error, Some("test error".to_string()));
    }
}
