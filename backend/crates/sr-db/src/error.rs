use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// True when the statement violated a UNIQUE constraint
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DbError::Sqlx {
                source: sqlx::Error::Database(db),
                ..
            } => db.is_unique_violation(),
            _ => false,
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
