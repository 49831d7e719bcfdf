pub mod error;
pub mod reconcile;
pub mod repositories;

pub use error::{DbError, Result};
pub use reconcile::synced_entity::SyncedEntity;
pub use reconcile::{reconcile, reconcile_atomically};
pub use repositories::backlog_repository::{BacklogQueryResult, BacklogRepository};
pub use repositories::custom_field_repository::CustomFieldRepository;
pub use repositories::label_repository::LabelRepository;
pub use repositories::reference_repository::ReferenceRepository;
pub use repositories::story_repository::StoryRepository;

use sqlx::SqlitePool;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Apply the embedded schema migrations that `pool` has not seen yet
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests;
