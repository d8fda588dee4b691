use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use summary_maker::ai::LlmClient;
use summary_maker::api::{self, AppState};
use summary_maker::core::config::AppConfig;
use summary_maker::features::SummaryService;
use summary_maker::store::InMemorySummaryRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    summary_maker::setup_logging();

    let config = AppConfig::from_env().context("Failed to load config")?;

    // The store lives exactly as long as the process.
    let client = LlmClient::new(&config).context("Failed to create completion client")?;
    let model = client.model_name().to_string();
    let repository = Arc::new(InMemorySummaryRepository::new());
    let service = SummaryService::new(Arc::new(client), repository)
        .with_timeout(config.provider_timeout);

    let state = AppState::new(config.min_text_length);
    state.initialize(service)?;
    let app = api::router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(model = %model, "Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("Shutdown signal received");
}
