//! Backlog REST API handler

use crate::{ApiResult, BacklogResponse, DbConn, ListBacklogQuery, StoryDto};

use sr_db::BacklogRepository;

use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};

/// GET /shortcut/backlog
///
/// Filters run in the database; sorting and paging happen here, once the
/// derived priority and period values are available.
pub async fn list_backlog(
    DbConn(mut conn): DbConn,
    query: Result<Query<ListBacklogQuery>, QueryRejection>,
) -> ApiResult<Json<BacklogResponse>> {
    let Query(query) = query?;

    let result = BacklogRepository::query(&mut conn, &query.filter()).await?;

    // Rows arrive ordered by id, which is also the unsorted order
    let mut stories = result.stories;
    let sort = query.sort();
    if !sort.is_empty() {
        sort.sort(&mut stories);
    }

    let count = stories.len();
    let items: Vec<StoryDto> = stories
        .into_iter()
        .skip(query.offset.unwrap_or(0))
        .take(query.limit.unwrap_or(usize::MAX))
        .map(StoryDto::from)
        .collect();

    log::debug!(
        "Backlog query matched {} of {} stories, returning {}",
        count,
        result.total,
        items.len()
    );

    Ok(Json(BacklogResponse {
        items,
        count,
        total: result.total,
    }))
}
