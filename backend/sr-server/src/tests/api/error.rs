use crate::ApiError;
use crate::sync::SyncError;

use sr_core::CoreError;
use sr_shortcut::ShortcutError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn status_and_body(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Person 3 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = status_and_body(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Person 3 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Name must not be empty".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = status_and_body(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let error = ApiError::Conflict {
        message: "Component already exists".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = status_and_body(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["message"], "Component already exists");
}

#[tokio::test]
async fn test_upstream_returns_502() {
    let error = ApiError::Upstream {
        message: "Shortcut API returned 500: boom".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = status_and_body(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = status_and_body(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "Invalid story id 'abc': must be an integer".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = status_and_body(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[test]
fn test_unknown_association_maps_to_not_found() {
    let core = CoreError::InvalidReferenceKind {
        value: "teams".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error: ApiError = core.into();

    match error {
        ApiError::NotFound { message, .. } => assert!(message.contains("teams")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_shortcut_api_error_maps_to_upstream() {
    let error: ApiError = ShortcutError::api_error(401, "Unauthorized".into()).into();

    match error {
        ApiError::Upstream { message, .. } => {
            assert!(message.contains("401"));
            assert!(message.contains("Unauthorized"));
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[test]
fn test_sync_source_error_maps_to_upstream() {
    let sync: SyncError = ShortcutError::api_error(503, "unavailable".into()).into();

    let error: ApiError = sync.into();

    assert!(matches!(error, ApiError::Upstream { .. }));
}

#[test]
fn test_sync_db_error_maps_to_internal() {
    let sync: SyncError = sqlx::Error::PoolTimedOut.into();

    let error: ApiError = sync.into();

    assert!(matches!(error, ApiError::Internal { .. }));
}

#[test]
fn test_row_not_found_maps_to_not_found() {
    let error: ApiError = sr_db::DbError::from(sqlx::Error::RowNotFound).into();

    assert!(matches!(error, ApiError::NotFound { .. }));
}
