use anyhow::Context;
use portfolio_summarizer::{config::Config, router, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Refuse to start without a complete configuration.
    let config = Config::from_env().context("failed to load configuration")?;
    telemetry::init(config.log_format());

    let app = router::build_app(&config).context("failed to initialize application")?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr()))?;
    info!(
        addr = %config.bind_addr(),
        model = %config.model(),
        "portfolio summarizer listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
