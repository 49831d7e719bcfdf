use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from calls to the Shortcut API. None of them are retried.
#[derive(Error, Debug)]
pub enum ShortcutError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Shortcut API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid Shortcut URL {url}: {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },
}

impl ShortcutError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ShortcutError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ShortcutError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api_error(status: u16, message: String) -> Self {
        ShortcutError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ShortcutError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ShortcutError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ShortcutError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ShortcutError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ShortcutError>;
