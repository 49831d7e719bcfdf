//! Path parameter parsing and entity lookup helpers
//!
//! Every handler that takes an id from the path goes through here so that
//! malformed ids and missing rows produce the same errors everywhere.

use crate::ApiError;

use sr_core::{ReferenceItem, ReferenceKind, Story};
use sr_db::{ReferenceRepository, StoryRepository};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqliteConnection;

// =============================================================================
// Path Parsing
// =============================================================================

/// Parse a numeric path id.
///
/// # Errors
/// Returns `ApiError::BadRequest` when `raw` is not an integer.
#[track_caller]
pub fn parse_id(raw: &str, what: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|_| ApiError::BadRequest {
        message: format!("Invalid {} id '{}': must be an integer", what, raw),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Parse the `{association}` segment of `/stories/{id}/{association}/{assoc_id}`.
///
/// # Errors
/// Returns `ApiError::NotFound` for an unknown segment.
#[track_caller]
pub fn parse_association(raw: &str) -> Result<ReferenceKind, ApiError> {
    Ok(raw.parse::<ReferenceKind>()?)
}

// =============================================================================
// Entity Resolution
// =============================================================================

/// Load a story or fail with "Story <id> not found"
pub async fn require_story(conn: &mut SqliteConnection, id: i64) -> Result<Story, ApiError> {
    StoryRepository::find_by_id(conn, id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Story {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Like [`require_story`] without loading the story's links
pub async fn ensure_story_exists(conn: &mut SqliteConnection, id: i64) -> Result<(), ApiError> {
    if StoryRepository::exists(conn, id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound {
            message: format!("Story {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Load a person, component, epic group or product, or fail with
/// "<Human name> <id> not found"
pub async fn require_reference(
    conn: &mut SqliteConnection,
    kind: ReferenceKind,
    id: i64,
) -> Result<ReferenceItem, ApiError> {
    ReferenceRepository::find_by_id(conn, kind, id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("{} {} not found", kind.display_name(), id),
            location: ErrorLocation::from(Location::caller()),
        })
}
