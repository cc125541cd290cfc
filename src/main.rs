//! # Hawkeye Management Service Main Entry Point
//!
//! This is the main entry point for the monitor management service.

use hawkeye_management::{
    config::ConfigLoader, db::init_pool, server::run_server, telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from layered env files and variables
    let config_loader = ConfigLoader::new();
    let config = config_loader.load()?;

    init_tracing(&config)?;

    // Log the loaded configuration (secrets redacted)
    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::info!(config = %redacted_json, "Effective configuration");
    }

    let db = init_pool(&config).await?;

    use migration::MigratorTrait;
    migration::Migrator::up(&db, None).await?;

    run_server(config, db).await
}
