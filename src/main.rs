use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use mindgauge_core::{config::recent_limit_from_env_value, CoreConfig, MemoryStore};

/// Main entry point for the mindgauge application
///
/// Starts the REST server, which serves the assessment, client and
/// dashboard endpoints along with OpenAPI documentation under /swagger-ui.
///
/// # Environment Variables
/// - `MINDGAUGE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `MINDGAUGE_EMAIL_DOMAIN`: domain used when synthesizing client contact
///   emails (default: "example.com")
/// - `MINDGAUGE_RECENT_LIMIT`: number of recent assessments shown on the
///   dashboard (default: 10)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mindgauge=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("MINDGAUGE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting mindgauge REST on {}", rest_addr);

    let email_domain = std::env::var("MINDGAUGE_EMAIL_DOMAIN")
        .unwrap_or_else(|_| mindgauge_core::constants::DEFAULT_CONTACT_EMAIL_DOMAIN.into());
    let recent_limit = recent_limit_from_env_value(std::env::var("MINDGAUGE_RECENT_LIMIT").ok())?;

    let cfg = Arc::new(CoreConfig::new(email_domain, recent_limit)?);
    let state = AppState::new(cfg, Arc::new(MemoryStore::new()));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
