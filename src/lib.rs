//! Antigravity Relay - a single-route HTTP relay for the Cloud Code
//! generation endpoint.
//!
//! Callers post a prompt together with their own project id and bearer token;
//! the relay wraps it in the upstream envelope, performs one outbound call with
//! a fixed timeout and answers with a normalized JSON result.
//!
//! # Architecture
//!
//! - [`core`]: Core functionality (config, errors, logging context, metrics, middleware)
//! - [`api`]: HTTP handlers, models, model catalog and route table
//! - [`services`]: Relay logic and the upstream client
//!
//! # Configuration
//!
//! Optional environment variables:
//! - `PORT`: Server port (default: 3000)
//! - `APP_ENV` / `NODE_ENV`: Runtime mode shown in the startup log (default: development)
//! - `RUST_LOG`: Log filter

pub mod api;
pub mod core;
pub mod services;

// Re-export commonly used types for convenience
pub use api::{build_router, AppState, GenerationRequest, GenerationResponse};
pub use core::{AppConfig, AppError, Result};
pub use services::{RelayService, UpstreamClient};
