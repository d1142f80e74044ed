//! HTTP request handlers for the relay API.
//!
//! This module contains the generation endpoint, the model listing, the
//! service descriptor and the metrics scrape.

use crate::api::catalog::available_models;
use crate::api::models::*;
use crate::core::config::AppConfig;
use crate::core::{AppError, Result};
use crate::services::{RelayService, UpstreamClient};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use prometheus::{Encoder, TextEncoder};
use std::sync::Arc;

pub const SERVICE_NAME: &str = "Antigravity API";

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub relay: RelayService,
}

impl AppState {
    pub fn new(config: AppConfig, relay: RelayService) -> Self {
        Self { config, relay }
    }

    /// Build the state, creating the upstream client from `config`.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let upstream = UpstreamClient::new(&config.upstream)?;
        Ok(Self::new(config, RelayService::new(upstream)))
    }
}

/// Forward a generation request to the backend.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "relay",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Generated content (fallback text when the reply had none)", body = GenerationResponse),
        (status = 400, description = "Missing required fields or undecodable body", body = ErrorResponse),
        (status = 500, description = "Transport failure or timeout reaching the backend", body = ErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected generation request body");
        AppError::from(rejection)
    })?;

    let response = state.relay.generate(request).await?;
    Ok(Json(response))
}

/// List the models offered through the relay.
#[utoipa::path(
    get,
    path = "/api/models",
    tag = "relay",
    responses(
        (status = 200, description = "Static model catalog", body = ModelListResponse)
    )
)]
pub async fn list_models() -> Json<ModelListResponse> {
    Json(ModelListResponse {
        success: true,
        models: available_models(),
    })
}

/// Service identity and endpoint map.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = ServiceInfo)
    )
)]
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointMap {
            generate: "POST /api/generate".to_string(),
            models: "GET /api/models".to_string(),
        },
    })
}

/// Prometheus metrics endpoint.
pub async fn metrics_handler() -> Result<Response> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        buffer,
    )
        .into_response())
}
