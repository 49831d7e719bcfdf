use crate::Result as DbErrorResult;

use sr_core::{ReferenceItem, ReferenceKind};

use sqlx::SqliteConnection;

/// CRUD over the four locally administered tables. They share one shape
/// (auto id, unique name) so the table is picked by [`ReferenceKind`].
pub struct ReferenceRepository;

impl ReferenceRepository {
    pub async fn find_all(
        conn: &mut SqliteConnection,
        kind: ReferenceKind,
    ) -> DbErrorResult<Vec<ReferenceItem>> {
        let sql = format!("SELECT id, name FROM {} ORDER BY id", kind.table());
        let rows: Vec<(i64, String)> = sqlx::query_as(&sql).fetch_all(&mut *conn).await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| ReferenceItem { id, name })
            .collect())
    }

    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        kind: ReferenceKind,
        id: i64,
    ) -> DbErrorResult<Option<ReferenceItem>> {
        let sql = format!("SELECT id, name FROM {} WHERE id = ?", kind.table());
        let row: Option<(i64, String)> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(row.map(|(id, name)| ReferenceItem { id, name }))
    }

    pub async fn find_by_name(
        conn: &mut SqliteConnection,
        kind: ReferenceKind,
        name: &str,
    ) -> DbErrorResult<Option<ReferenceItem>> {
        let sql = format!("SELECT id, name FROM {} WHERE name = ?", kind.table());
        let row: Option<(i64, String)> = sqlx::query_as(&sql)
            .bind(name)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(row.map(|(id, name)| ReferenceItem { id, name }))
    }

    /// Insert a row. A duplicate name fails with a unique violation.
    pub async fn create(
        conn: &mut SqliteConnection,
        kind: ReferenceKind,
        name: &str,
    ) -> DbErrorResult<ReferenceItem> {
        let sql = format!("INSERT INTO {} (name) VALUES (?)", kind.table());
        let result = sqlx::query(&sql).bind(name).execute(&mut *conn).await?;

        Ok(ReferenceItem {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    /// Rename a row. Returns the number of rows changed (0 when absent).
    pub async fn update(
        conn: &mut SqliteConnection,
        kind: ReferenceKind,
        id: i64,
        name: &str,
    ) -> DbErrorResult<u64> {
        let sql = format!("UPDATE {} SET name = ? WHERE id = ?", kind.table());
        let result = sqlx::query(&sql)
            .bind(name)
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a row and its story links. Returns the number of rows deleted.
    pub async fn delete(
        conn: &mut SqliteConnection,
        kind: ReferenceKind,
        id: i64,
    ) -> DbErrorResult<u64> {
        let sql = format!("DELETE FROM {} WHERE id = ?", kind.table());
        let result = sqlx::query(&sql).bind(id).execute(&mut *conn).await?;

        Ok(result.rows_affected())
    }
}
