//! Axum extractor for a request-scoped database connection

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::Sqlite;
use sqlx::pool::PoolConnection;

/// One pooled connection held for the whole request.
///
/// The connection goes back to the pool when the handler's future is
/// dropped, whether it returned a response or an error.
pub struct DbConn(pub PoolConnection<Sqlite>);

impl FromRequestParts<AppState> for DbConn {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let conn = state.pool.acquire().await?;
            Ok(DbConn(conn))
        }
    }
}
