use crate::{Result as DbErrorResult, SyncedEntity};

use sr_core::{CustomField, CustomFieldValue};

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use sqlx::SqliteConnection;

pub struct CustomFieldRepository;

impl CustomFieldRepository {
    /// All fields ordered by id, each with its values in API order
    pub async fn find_all(conn: &mut SqliteConnection) -> DbErrorResult<Vec<CustomField>> {
        let fields: Vec<(String, String)> =
            sqlx::query_as("SELECT id, name FROM custom_fields ORDER BY id")
                .fetch_all(&mut *conn)
                .await?;

        let values: Vec<(String, String, String)> = sqlx::query_as(
            r#"
                SELECT value_id, field_id, value
                FROM custom_field_values
                ORDER BY field_id, position
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        let mut by_field: HashMap<String, Vec<CustomFieldValue>> = HashMap::new();
        for (value_id, field_id, value) in values {
            by_field
                .entry(field_id.clone())
                .or_default()
                .push(CustomFieldValue {
                    value_id,
                    field_id,
                    value,
                });
        }

        Ok(fields
            .into_iter()
            .map(|(id, name)| {
                let values = by_field.remove(&id).unwrap_or_default();
                CustomField { id, name, values }
            })
            .collect())
    }

    /// Upsert the field's values and drop the ones it no longer has.
    /// Surviving values keep their story links.
    async fn write_values(conn: &mut SqliteConnection, field: &CustomField) -> DbErrorResult<()> {
        for (position, value) in field.values.iter().enumerate() {
            sqlx::query(
                r#"
                    INSERT INTO custom_field_values (value_id, field_id, value, position)
                    VALUES (?, ?, ?, ?)
                    ON CONFLICT(value_id) DO UPDATE SET
                        field_id = excluded.field_id,
                        value = excluded.value,
                        position = excluded.position
                "#,
            )
            .bind(&value.value_id)
            .bind(&field.id)
            .bind(&value.value)
            .bind(position as i64)
            .execute(&mut *conn)
            .await?;
        }

        let persisted: Vec<String> =
            sqlx::query_scalar("SELECT value_id FROM custom_field_values WHERE field_id = ?")
                .bind(&field.id)
                .fetch_all(&mut *conn)
                .await?;

        let keep: BTreeSet<&str> = field.values.iter().map(|v| v.value_id.as_str()).collect();
        for value_id in persisted.iter().filter(|id| !keep.contains(id.as_str())) {
            sqlx::query("DELETE FROM custom_field_values WHERE value_id = ?")
                .bind(value_id)
                .execute(&mut *conn)
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl SyncedEntity for CustomField {
    type Id = String;

    const NAME: &'static str = "custom fields";

    fn sync_id(&self) -> String {
        self.id.clone()
    }

    async fn load_ids(conn: &mut SqliteConnection) -> DbErrorResult<Vec<String>> {
        let ids = sqlx::query_scalar("SELECT id FROM custom_fields")
            .fetch_all(&mut *conn)
            .await?;

        Ok(ids)
    }

    async fn load_all(conn: &mut SqliteConnection) -> DbErrorResult<Vec<Self>> {
        CustomFieldRepository::find_all(conn).await
    }

    async fn insert(conn: &mut SqliteConnection, record: &Self) -> DbErrorResult<()> {
        sqlx::query("INSERT INTO custom_fields (id, name) VALUES (?, ?)")
            .bind(&record.id)
            .bind(&record.name)
            .execute(&mut *conn)
            .await?;

        CustomFieldRepository::write_values(conn, record).await
    }

    async fn update(conn: &mut SqliteConnection, record: &Self) -> DbErrorResult<()> {
        sqlx::query("UPDATE custom_fields SET name = ? WHERE id = ?")
            .bind(&record.name)
            .bind(&record.id)
            .execute(&mut *conn)
            .await?;

        CustomFieldRepository::write_values(conn, record).await
    }

    async fn delete(conn: &mut SqliteConnection, id: &String) -> DbErrorResult<()> {
        // Values and their story links cascade
        sqlx::query("DELETE FROM custom_fields WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}
