use crate::Result as DbErrorResult;

use std::fmt::Debug;

use async_trait::async_trait;
use sqlx::SqliteConnection;

/// A table that is mirrored from the project-tracking API and kept in step
/// with it by [`reconcile`](crate::reconcile).
#[async_trait]
pub trait SyncedEntity: Sized + Send + Sync {
    /// Stable identifier assigned by the API
    type Id: Ord + Clone + Debug + Send + Sync;

    /// Entity name for log lines
    const NAME: &'static str;

    fn sync_id(&self) -> Self::Id;

    async fn load_ids(conn: &mut SqliteConnection) -> DbErrorResult<Vec<Self::Id>>;

    async fn load_all(conn: &mut SqliteConnection) -> DbErrorResult<Vec<Self>>;

    async fn insert(conn: &mut SqliteConnection, record: &Self) -> DbErrorResult<()>;

    /// Overwrite the persisted row (and owned children) with `record`
    async fn update(conn: &mut SqliteConnection, record: &Self) -> DbErrorResult<()>;

    async fn delete(conn: &mut SqliteConnection, id: &Self::Id) -> DbErrorResult<()>;
}
