use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_ORIGINS, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 lets the OS pick
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host must not be empty"));
        }

        Ok(())
    }
}
