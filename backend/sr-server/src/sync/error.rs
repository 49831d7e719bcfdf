use sr_db::DbError;
use sr_shortcut::ShortcutError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a sync run stopped. Either way nothing from the failing step is committed.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Fetching from Shortcut failed: {source} {location}")]
    Source {
        source: ShortcutError,
        location: ErrorLocation,
    },

    #[error("Writing synced data failed: {source} {location}")]
    Db {
        source: DbError,
        location: ErrorLocation,
    },
}

impl From<ShortcutError> for SyncError {
    #[track_caller]
    fn from(source: ShortcutError) -> Self {
        Self::Source {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for SyncError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for SyncError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Db {
            source: DbError::from(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
