use cicdlearn_api::{ApiServer, ApiState};
use cicdlearn_data::{PgStore, PoolSettings};
use cicdlearn_telemetry::{LoggingConfig, init_logging};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::settings::Settings;

/// Entry point for the backend boot sequence.
///
/// Reads settings, installs logging, connects and migrates the database, then
/// serves HTTP until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if any boot step fails or the server stops unexpectedly.
pub async fn run_app() -> AppResult<()> {
    let settings = Settings::from_env()?;
    run_app_with(settings).await
}

async fn run_app_with(settings: Settings) -> AppResult<()> {
    let logging = LoggingConfig {
        level: &settings.log_level,
        format: settings.log_format,
        ..LoggingConfig::default()
    };
    init_logging(&logging).map_err(|err| AppError::telemetry("telemetry.init", err))?;

    info!("cicdlearn backend bootstrap starting");

    let store = PgStore::connect(&settings.postgres_url, PoolSettings::default())
        .await
        .map_err(|err| AppError::data("store.connect", err))?;

    let api = ApiServer::new(ApiState::from_store(store.clone()));
    let served = api.serve(settings.bind_addr).await;

    store.close().await;
    info!("cicdlearn backend stopped");
    served.map_err(|err| AppError::api_server("api.serve", err))
}
