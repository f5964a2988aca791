use fred_connector::core::config::HarnessConfig;
use fred_connector::{CategorySyncService, Configuration, Connector, FredClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // One sequential sync run per invocation; a single worker thread is
    // all it needs.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let harness = HarnessConfig::from_env();
    let configuration = Configuration::from_file(&harness.configuration_path)?;
    tracing::info!(
        "Configuration loaded from {}",
        harness.configuration_path
    );

    let connector = Connector::new(CategorySyncService::new(FredClient::new()));
    connector.debug(&configuration, serde_json::json!({})).await?;

    Ok(())
}
