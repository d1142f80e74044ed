//! OpenAPI document for the relay API.

use crate::api::models::{
    EndpointMap, ErrorResponse, GenerationRequest, GenerationResponse, ModelInfo,
    ModelListResponse, ServiceInfo,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Antigravity API",
        description = "Relay for the Cloud Code generateContent endpoint"
    ),
    paths(
        crate::api::handlers::generate,
        crate::api::handlers::list_models,
        crate::api::handlers::service_info,
    ),
    components(schemas(
        GenerationRequest,
        GenerationResponse,
        ErrorResponse,
        ModelInfo,
        ModelListResponse,
        ServiceInfo,
        EndpointMap,
    )),
    tags(
        (name = "relay", description = "Generation relay"),
        (name = "health", description = "Service identity")
    )
)]
pub struct ApiDoc;
