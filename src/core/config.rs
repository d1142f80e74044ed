//! Configuration management for the relay server.
//!
//! Configuration is read once from the environment at process start and is
//! never mutated afterwards. Only the listening port and the runtime mode
//! label come from the environment; the upstream endpoint is fixed.

use anyhow::{Context, Result};

/// Fixed Cloud Code generation endpoint.
pub const UPSTREAM_GENERATE_URL: &str =
    "https://cloudcode-pa.googleapis.com/v1internal:generateContent";

/// Timeout applied to the single outbound call, in milliseconds.
pub const UPSTREAM_TIMEOUT_MS: u64 = 30_000;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration (host, port)
    pub server: ServerConfig,

    /// Runtime mode label, only reported in the startup log
    pub environment: String,

    /// Upstream generation endpoint settings
    pub upstream: UpstreamConfig,
}

/// Server-specific configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// Where and how the relay reaches the generative backend.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Full URL of the generateContent method
    pub url: String,

    /// Call timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_upstream_url(),
            timeout_ms: default_upstream_timeout(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            environment: default_environment(),
            upstream: UpstreamConfig::default(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_upstream_url() -> String {
    UPSTREAM_GENERATE_URL.to_string()
}

fn default_upstream_timeout() -> u64 {
    UPSTREAM_TIMEOUT_MS
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// * `PORT` - listening port (default: 3000)
    /// * `APP_ENV` - runtime mode label, falls back to `NODE_ENV`
    ///   (default: `development`)
    ///
    /// The caller is expected to have loaded `.env` beforehand.
    pub fn from_env() -> Result<Self> {
        let mut config = AppConfig::default();

        if let Some(port_str) = non_empty_var("PORT") {
            config.server.port = port_str
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {}", port_str))?;
        }

        if let Some(env) = non_empty_var("APP_ENV").or_else(|| non_empty_var("NODE_ENV")) {
            config.environment = env;
        }

        Ok(config)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
