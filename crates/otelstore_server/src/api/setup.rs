use anyhow::Context;
use otelstore_settings::{LoggingSettings, ServerConfig};
use otelstore_sql::PostgresClient;
use std::io;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

const DEFAULT_TIME_PATTERN: &str =
    "[year]-[month]-[day]T[hour repr:24]:[minute]:[second]::[subsecond digits:4]";

pub fn setup_logging(settings: &LoggingSettings) -> Result<(), anyhow::Error> {
    let time_format = time::format_description::parse(DEFAULT_TIME_PATTERN)
        .with_context(|| "Failed to parse log time format")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .with_context(|| format!("Invalid log level {}", settings.log_level))?;

    let result = if settings.json {
        tracing_subscriber::fmt()
            .json()
            .with_target(false)
            .flatten_event(true)
            .with_thread_ids(true)
            .with_timer(UtcTime::new(time_format))
            .with_env_filter(filter)
            .with_writer(io::stdout)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(true)
            .with_timer(UtcTime::new(time_format))
            .with_env_filter(filter)
            .with_writer(io::stdout)
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to setup logging: {e}"))
}

/// Logging, configuration and a migrated database client, in that order.
pub async fn setup_components() -> Result<(Arc<ServerConfig>, PostgresClient), anyhow::Error> {
    // soft fail: a subscriber may already be installed
    let _ = setup_logging(&LoggingSettings::default()).is_ok();

    let config = Arc::new(ServerConfig::default());

    let db_client = PostgresClient::new(None, &config.database_settings)
        .await
        .with_context(|| "Failed to create Postgres client")?;

    info!("✅ Components initialized");

    Ok((config, db_client))
}
