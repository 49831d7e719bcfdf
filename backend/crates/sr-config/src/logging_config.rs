use crate::{DEFAULT_LOG_DIRECTORY, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub colored: bool,
    /// Log directory, relative to the config dir
    pub dir: String,
    /// Log file name inside `dir`. None = stdout
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: true,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
        }
    }
}
