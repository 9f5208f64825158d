use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG` when set.
    pub log_level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let json = std::env::var("LOG_JSON")
            .map(|value| !matches!(value.to_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        Self { log_level, json }
    }
}
