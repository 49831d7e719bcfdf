//! Admin endpoints that pull data from Shortcut on demand

use crate::{
    ApiResult, AppState, CustomFieldDto, LabelDto, SyncResponse,
    sync::{sync_backlog, sync_custom_fields, sync_labels},
};

use axum::{Json, extract::State};

/// GET /admin/shortcut/labels
pub async fn sync_labels_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<LabelDto>>> {
    let labels = sync_labels(&state.pool, state.source.as_ref()).await?;

    Ok(Json(labels.into_iter().map(LabelDto::from).collect()))
}

/// GET /admin/shortcut/fields
pub async fn sync_fields_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CustomFieldDto>>> {
    let fields = sync_custom_fields(&state.pool, state.source.as_ref()).await?;

    Ok(Json(fields.into_iter().map(CustomFieldDto::from).collect()))
}

/// GET|POST /admin/shortcut/backlog
pub async fn sync_backlog_handler(State(state): State<AppState>) -> ApiResult<Json<SyncResponse>> {
    let summary = sync_backlog(&state.pool, state.source.as_ref(), &state.backlog_state).await?;

    Ok(Json(summary.into()))
}
