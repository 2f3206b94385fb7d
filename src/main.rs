use anyhow::Result;
use tracing::info;

use caresite_gateway::config::Config;
use caresite_gateway::handlers::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("caresite_gateway=info".parse()?),
        )
        .init();

    info!("Starting caresite gateway");

    // Load configuration from environment
    let config = Config::from_env()?;

    let state = AppState::new(&config);
    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
