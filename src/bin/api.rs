use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wealth_advisor::{api::start_server, config::AppConfig, speech::create_synthesizer};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run() -> wealth_advisor::Result<()> {
    let config = AppConfig::from_env()?;

    info!("Wealth Advisor - API Server");
    info!(port = config.port, tts_backend = ?config.tts_backend, "Configuration loaded");

    let synthesizer = create_synthesizer(&config)?;
    info!(backend = synthesizer.name(), "Speech synthesizer initialized");

    start_server(&config, synthesizer).await
}
