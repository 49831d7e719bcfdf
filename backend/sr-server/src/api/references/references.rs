//! REST handlers shared by the four locally administered collections
//! (persons, components, epic groups, products).
//!
//! The collections differ only in their [`ReferenceKind`], so one set of
//! handlers serves all of them and [`reference_routes`] mounts it per kind.

use crate::{
    ApiError, ApiResult, AppState, DbConn, DeleteResponse, ReferenceDto, ReferenceRequest,
    parse_id, require_reference,
};

use sr_core::ReferenceKind;
use sr_db::ReferenceRepository;

use std::panic::Location;

use axum::{
    Json, Router,
    extract::{Path, rejection::JsonRejection},
    routing::get,
};
use error_location::ErrorLocation;
use sqlx::SqliteConnection;

/// Routes for one collection: `<prefix>` and `<prefix>/{id}`
pub fn reference_routes(kind: ReferenceKind) -> Router<AppState> {
    let collection = kind.route_prefix();
    let item = format!("{}/{{id}}", collection);

    Router::new()
        .route(
            collection,
            get(move |conn: DbConn| list_references(conn, kind)).post(
                move |conn: DbConn, body: Result<Json<ReferenceRequest>, JsonRejection>| {
                    create_reference(conn, kind, body)
                },
            ),
        )
        .route(
            &item,
            get(move |conn: DbConn, Path(id): Path<String>| get_reference(conn, kind, id))
                .put(
                    move |conn: DbConn,
                          Path(id): Path<String>,
                          body: Result<Json<ReferenceRequest>, JsonRejection>| {
                        update_reference(conn, kind, id, body)
                    },
                )
                .delete(move |conn: DbConn, Path(id): Path<String>| {
                    delete_reference(conn, kind, id)
                }),
        )
}

/// GET /persons (and siblings)
pub async fn list_references(
    DbConn(mut conn): DbConn,
    kind: ReferenceKind,
) -> ApiResult<Json<Vec<ReferenceDto>>> {
    let items = ReferenceRepository::find_all(&mut conn, kind).await?;

    Ok(Json(items.into_iter().map(ReferenceDto::from).collect()))
}

/// POST /persons (and siblings)
pub async fn create_reference(
    DbConn(mut conn): DbConn,
    kind: ReferenceKind,
    body: Result<Json<ReferenceRequest>, JsonRejection>,
) -> ApiResult<Json<ReferenceDto>> {
    let Json(req) = body?;
    let name = req.validated_name()?;

    ensure_name_free(&mut conn, kind, name, None).await?;

    let item = ReferenceRepository::create(&mut conn, kind, name)
        .await
        .map_err(|e| conflict_or(e, kind))?;

    log::info!("Created {} {} '{}'", kind.table(), item.id, item.name);

    Ok(Json(item.into()))
}

/// GET /persons/{id} (and siblings)
pub async fn get_reference(
    DbConn(mut conn): DbConn,
    kind: ReferenceKind,
    id: String,
) -> ApiResult<Json<ReferenceDto>> {
    let id = parse_id(&id, kind.display_name())?;
    let item = require_reference(&mut conn, kind, id).await?;

    Ok(Json(item.into()))
}

/// PUT /persons/{id} (and siblings)
pub async fn update_reference(
    DbConn(mut conn): DbConn,
    kind: ReferenceKind,
    id: String,
    body: Result<Json<ReferenceRequest>, JsonRejection>,
) -> ApiResult<Json<ReferenceDto>> {
    let id = parse_id(&id, kind.display_name())?;
    let Json(req) = body?;

    let mut item = require_reference(&mut conn, kind, id).await?;
    let name = req.validated_name()?;

    ensure_name_free(&mut conn, kind, name, Some(id)).await?;

    ReferenceRepository::update(&mut conn, kind, id, name)
        .await
        .map_err(|e| conflict_or(e, kind))?;
    item.name = name.to_string();

    log::info!("Renamed {} {} to '{}'", kind.table(), id, item.name);

    Ok(Json(item.into()))
}

/// DELETE /persons/{id} (and siblings)
pub async fn delete_reference(
    DbConn(mut conn): DbConn,
    kind: ReferenceKind,
    id: String,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_id(&id, kind.display_name())?;
    let item = require_reference(&mut conn, kind, id).await?;

    ReferenceRepository::delete(&mut conn, kind, id).await?;

    log::info!("Deleted {} {} '{}'", kind.table(), id, item.name);

    Ok(Json(DeleteResponse::deleted(&item.name)))
}

/// Fail with 409 when another row of `kind` already uses `name`
async fn ensure_name_free(
    conn: &mut SqliteConnection,
    kind: ReferenceKind,
    name: &str,
    own_id: Option<i64>,
) -> ApiResult<()> {
    match ReferenceRepository::find_by_name(conn, kind, name).await? {
        Some(existing) if Some(existing.id) != own_id => Err(already_exists(kind)),
        _ => Ok(()),
    }
}

/// A concurrent insert can still hit the UNIQUE index after the lookup
fn conflict_or(e: sr_db::DbError, kind: ReferenceKind) -> ApiError {
    if e.is_unique_violation() {
        already_exists(kind)
    } else {
        e.into()
    }
}

#[track_caller]
fn already_exists(kind: ReferenceKind) -> ApiError {
    ApiError::Conflict {
        message: format!("{} already exists", kind.display_name()),
        location: ErrorLocation::from(Location::caller()),
    }
}
