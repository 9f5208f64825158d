use otelstore_settings::ServerConfig;
use otelstore_sql::TelemetryWriter;
use std::sync::Arc;

pub struct AppState {
    pub writer: Arc<dyn TelemetryWriter>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(writer: Arc<dyn TelemetryWriter>, config: Arc<ServerConfig>) -> Self {
        Self { writer, config }
    }
}
