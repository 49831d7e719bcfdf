//! Story REST API handlers

use crate::{
    ApiResult, DbConn, StoryDto, ensure_story_exists, parse_association, parse_id,
    require_reference, require_story,
};

use sr_db::StoryRepository;

use axum::{Json, extract::Path};

/// GET /stories/{id}
pub async fn get_story(
    DbConn(mut conn): DbConn,
    Path(story_id): Path<String>,
) -> ApiResult<Json<StoryDto>> {
    let story_id = parse_id(&story_id, "story")?;
    let story = require_story(&mut conn, story_id).await?;

    Ok(Json(story.into()))
}

/// PUT /stories/{id}/{association}/{assoc_id}
///
/// Both the story and the entity must exist. Attaching twice is a no-op.
pub async fn attach_to_story(
    DbConn(mut conn): DbConn,
    Path((story_id, association, item_id)): Path<(String, String, String)>,
) -> ApiResult<Json<StoryDto>> {
    let story_id = parse_id(&story_id, "story")?;
    let kind = parse_association(&association)?;
    let item_id = parse_id(&item_id, kind.display_name())?;

    ensure_story_exists(&mut conn, story_id).await?;
    require_reference(&mut conn, kind, item_id).await?;

    StoryRepository::attach(&mut conn, story_id, kind, item_id).await?;
    log::info!("Attached {} {} to story {}", kind.display_name(), item_id, story_id);

    let story = require_story(&mut conn, story_id).await?;
    Ok(Json(story.into()))
}

/// DELETE /stories/{id}/{association}/{assoc_id}
///
/// The story must exist; removing a link that is not there changes nothing.
pub async fn detach_from_story(
    DbConn(mut conn): DbConn,
    Path((story_id, association, item_id)): Path<(String, String, String)>,
) -> ApiResult<Json<StoryDto>> {
    let story_id = parse_id(&story_id, "story")?;
    let kind = parse_association(&association)?;
    let item_id = parse_id(&item_id, kind.display_name())?;

    ensure_story_exists(&mut conn, story_id).await?;

    let removed = StoryRepository::detach(&mut conn, story_id, kind, item_id).await?;
    if removed > 0 {
        log::info!("Detached {} {} from story {}", kind.display_name(), item_id, story_id);
    } else {
        log::debug!(
            "{} {} was not attached to story {}",
            kind.display_name(),
            item_id,
            story_id
        );
    }

    let story = require_story(&mut conn, story_id).await?;
    Ok(Json(story.into()))
}
