//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging when you only want the REST server
//! (with OpenAPI/Swagger UI). The workspace's main `mindgauge-run` binary is
//! the deployment entry point.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use mindgauge_core::{config::recent_limit_from_env_value, CoreConfig, MemoryStore};

/// Main entry point for the mindgauge REST API server.
///
/// Starts the REST API server on the configured address (default:
/// 0.0.0.0:3000) with OpenAPI/Swagger documentation.
///
/// # Environment Variables
/// - `MINDGAUGE_REST_ADDR`: server address (default: "0.0.0.0:3000")
/// - `MINDGAUGE_EMAIL_DOMAIN`: domain for synthesized client contact emails
/// - `MINDGAUGE_RECENT_LIMIT`: dashboard recent-assessment list size
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration values are invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MINDGAUGE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting mindgauge REST API on {}", addr);

    let email_domain = std::env::var("MINDGAUGE_EMAIL_DOMAIN")
        .unwrap_or_else(|_| mindgauge_core::constants::DEFAULT_CONTACT_EMAIL_DOMAIN.into());
    let recent_limit =
        recent_limit_from_env_value(std::env::var("MINDGAUGE_RECENT_LIMIT").ok())?;

    let cfg = Arc::new(CoreConfig::new(email_domain, recent_limit)?);
    let state = AppState::new(cfg, Arc::new(MemoryStore::new()));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
