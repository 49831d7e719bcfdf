//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use crate::sync::SyncError;

use sr_core::CoreError;
use sr_db::DbError;
use sr_shortcut::ShortcutError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Duplicate name (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Call to the project-tracking API failed (502)
    #[error("Upstream error: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Upstream { message, .. } => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody {
                    code: "UPSTREAM_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);

        if e.is_unique_violation() {
            return ApiError::Conflict {
                message: "Resource already exists".to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        match e {
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Sqlx { .. } => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Migration { message, .. } => ApiError::Internal {
                message: format!("Database migration error: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Unknown association segments read as a missing route
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidReferenceKind { value, .. } => ApiError::NotFound {
                message: format!("Unknown story association '{}'", value),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<ShortcutError> for ApiError {
    #[track_caller]
    fn from(e: ShortcutError) -> Self {
        log::error!("Shortcut API error: {}", e);

        let message = match e {
            ShortcutError::Api {
                status, message, ..
            } => format!("Shortcut API returned {}: {}", status, message),
            ShortcutError::Http { message, .. } => {
                format!("Shortcut API request failed: {}", message)
            }
            ShortcutError::Json { message, .. } => {
                format!("Unexpected Shortcut API response: {}", message)
            }
            ShortcutError::InvalidUrl { url, .. } => format!("Invalid Shortcut API url {}", url),
        };

        ApiError::Upstream {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SyncError> for ApiError {
    #[track_caller]
    fn from(e: SyncError) -> Self {
        match e {
            SyncError::Source { source, .. } => source.into(),
            SyncError::Db { source, .. } => source.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(e: QueryRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
