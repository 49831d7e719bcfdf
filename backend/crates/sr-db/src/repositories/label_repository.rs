use crate::{Result as DbErrorResult, SyncedEntity};

use sr_core::Label;

use async_trait::async_trait;
use sqlx::SqliteConnection;

pub struct LabelRepository;

impl LabelRepository {
    pub async fn find_all(conn: &mut SqliteConnection) -> DbErrorResult<Vec<Label>> {
        let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM labels ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| Label { id, name })
            .collect())
    }
}

#[async_trait]
impl SyncedEntity for Label {
    type Id = i64;

    const NAME: &'static str = "labels";

    fn sync_id(&self) -> i64 {
        self.id
    }

    async fn load_ids(conn: &mut SqliteConnection) -> DbErrorResult<Vec<i64>> {
        let ids = sqlx::query_scalar("SELECT id FROM labels")
            .fetch_all(&mut *conn)
            .await?;

        Ok(ids)
    }

    async fn load_all(conn: &mut SqliteConnection) -> DbErrorResult<Vec<Self>> {
        LabelRepository::find_all(conn).await
    }

    async fn insert(conn: &mut SqliteConnection, record: &Self) -> DbErrorResult<()> {
        sqlx::query("INSERT INTO labels (id, name) VALUES (?, ?)")
            .bind(record.id)
            .bind(&record.name)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    async fn update(conn: &mut SqliteConnection, record: &Self) -> DbErrorResult<()> {
        sqlx::query("UPDATE labels SET name = ? WHERE id = ?")
            .bind(&record.name)
            .bind(record.id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    async fn delete(conn: &mut SqliteConnection, id: &i64) -> DbErrorResult<()> {
        // story_labels rows go with it (ON DELETE CASCADE)
        sqlx::query("DELETE FROM labels WHERE id = ?")
            .bind(*id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}
