use crate::env::{apply_env_bool, apply_env_option_string, apply_env_parse, apply_env_string};
use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, ServerConfig, ShortcutConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub shortcut: ShortcutConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Every setting resolves, highest first, from:
    /// 1. the file named by `<VAR>_FILE`
    /// 2. `<VAR>`
    /// 3. `config.toml` in the config directory
    /// 4. the built-in default
    ///
    /// The config directory is `SR_CONFIG_DIR`, else `./.sr/`, and is created
    /// when missing. Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: SR_CONFIG_DIR env var > ./.sr/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration. Call after load() to catch errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.shortcut.validate()?;

        // Keep the database inside the config dir
        let db_path = Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if !self.shortcut.has_token() {
            warn!("No Shortcut API token configured (SHORTCUT_TOKEN); sync requests will fail");
        }

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute log file path, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs the token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  cors: {}", self.server.allowed_origins.join(", "));
        info!("  database: {}", self.database.path);
        info!(
            "  shortcut: {} (token: {}, state: {:?}, page size: {})",
            self.shortcut.url,
            if self.shortcut.has_token() {
                "set"
            } else {
                "missing"
            },
            self.shortcut.backlog_state,
            self.shortcut.page_size
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        apply_env_string("SR_SERVER_HOST", &mut self.server.host);
        apply_env_parse("SR_SERVER_PORT", &mut self.server.port);

        // Database
        apply_env_string("SR_DATABASE_PATH", &mut self.database.path);

        // Shortcut
        apply_env_string("SHORTCUT_URL", &mut self.shortcut.url);
        apply_env_option_string("SHORTCUT_TOKEN", &mut self.shortcut.token);
        apply_env_string("SHORTCUT_BACKLOG_STATE", &mut self.shortcut.backlog_state);
        apply_env_parse("SHORTCUT_PAGE_SIZE", &mut self.shortcut.page_size);

        // Logging
        apply_env_parse("LOG_LEVEL", &mut self.logging.level);
        apply_env_bool("SR_LOG_COLORED", &mut self.logging.colored);
        apply_env_option_string("SR_LOG_FILE", &mut self.logging.file);
    }
}
