//! Business logic services.
//!
//! - [`relay_service`]: defaulting, validation and the upstream round trip
//! - [`envelope`]: upstream request envelope and reply navigation
//! - [`upstream`]: HTTP client for the generation endpoint

pub mod envelope;
pub mod relay_service;
pub mod upstream;

pub use relay_service::{RelayService, ResolvedRequest};
pub use upstream::UpstreamClient;
