use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] sr_config::ConfigError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl ServerError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
