use crate::env_or_default;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GrpcSettings {
    pub host: String,
    pub port: u16,
}

impl GrpcSettings {
    /// Address handed to the listener. IPv6 hosts keep their brackets.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for GrpcSettings {
    fn default() -> Self {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "[::]".to_string());
        let port = env_or_default::<u16>("APP_PORT", 4317);

        Self { host, port }
    }
}
