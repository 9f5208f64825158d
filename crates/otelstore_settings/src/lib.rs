use serde::Serialize;
use std::str::FromStr;
use tracing::warn;

pub mod database;
pub mod grpc;
pub mod logging;

pub use database::DatabaseSettings;
pub use grpc::GrpcSettings;
pub use logging::LoggingSettings;

/// Read `key` from the environment and parse it, falling back to `default`
/// when the variable is unset or unparseable.
pub(crate) fn env_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!("Invalid value {:?} for {}, using default {}", raw, key, default);
            default
        }),
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct ServerConfig {
    pub database_settings: DatabaseSettings,
    pub grpc_settings: GrpcSettings,
    pub logging_settings: LoggingSettings,
}
