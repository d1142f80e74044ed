//! Antigravity Relay - Main entry point
//!
//! Loads `.env`, initializes logging and metrics, builds the router and
//! serves it until the process is stopped.

use antigravity_relay::{api::build_router, core::init_metrics, AppConfig, AppState};
use anyhow::Result;
use chrono::Local;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Custom time formatter that uses local timezone (respects TZ environment variable)
struct LocalTime;

impl tracing_subscriber::fmt::time::FormatTime for LocalTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S"))
    }
}

fn init_tracing() {
    // Check if NO_COLOR environment variable is set (for file logging without ANSI codes)
    let no_color = std::env::var("NO_COLOR").is_ok();

    let base_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,antigravity_relay=debug".to_string());

    // Always suppress noisy HTTP library logs regardless of RUST_LOG setting
    let filter_str = format!(
        "{},hyper=warn,hyper::proto=warn,h2=warn,reqwest=warn",
        base_filter
    );
    let filter = tracing_subscriber::EnvFilter::new(filter_str);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(LocalTime)
                .with_ansi(!no_color),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before reading any environment variables)
    dotenvy::dotenv().ok();

    init_tracing();
    init_metrics();

    let config = AppConfig::from_env()?;
    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::new(host, config.server.port);
    let environment = config.environment.clone();

    let state = Arc::new(AppState::from_config(config)?);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Antigravity API running on http://localhost:{}", addr.port());
    tracing::info!("Environment: {}", environment);
    tracing::info!("Endpoints: GET /, POST /api/generate, GET /api/models, GET /metrics");

    axum::serve(listener, app).await?;

    Ok(())
}
