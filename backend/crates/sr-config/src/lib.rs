mod config;
mod database_config;
mod env;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod shortcut_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use env::read_env;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use shortcut_config::ShortcutConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost",
    "http://localhost:5173",
    "http://localhost:8000",
];

const DEFAULT_DATABASE_FILENAME: &str = "shortcut_report.db";

const DEFAULT_SHORTCUT_URL: &str = "https://api.app.shortcut.com/api/v3";
const DEFAULT_BACKLOG_STATE: &str = "Önskemål";
const DEFAULT_PAGE_SIZE: u32 = 25;
const MIN_PAGE_SIZE: u32 = 1;
const MAX_PAGE_SIZE: u32 = 25;

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";

/// Directory holding config.toml, the database and log files
const CONFIG_DIR_ENV: &str = "SR_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".sr";
const CONFIG_FILENAME: &str = "config.toml";
