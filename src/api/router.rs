//! Route table and middleware stack.

use crate::api::handlers::{generate, list_models, metrics_handler, service_info, AppState};
use crate::core::{request_id_middleware, MetricsMiddleware};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with all endpoints.
///
/// CORS is fully permissive; every route except `/metrics` is counted by the
/// metrics middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/", get(service_info))
        .route("/api/generate", post(generate))
        .route("/api/models", get(list_models))
        .layer(axum::middleware::from_fn(MetricsMiddleware::track_metrics))
        .with_state(state);

    Router::new()
        .merge(api_routes)
        .route("/metrics", get(metrics_handler))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
