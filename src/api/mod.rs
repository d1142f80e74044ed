//! API layer for the relay server.
//!
//! This module contains the HTTP handlers, request/response models, the
//! static model catalog, the route table and the OpenAPI document.

pub mod catalog;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod router;

// Re-export commonly used types
pub use catalog::available_models;
pub use handlers::{generate, list_models, metrics_handler, service_info, AppState};
pub use models::{
    ErrorResponse, GenerationRequest, GenerationResponse, ModelInfo, ModelListResponse,
    ServiceInfo,
};
pub use openapi::ApiDoc;
pub use router::build_router;
