use crate::repositories::{MAX_IN_LIST, push_id_list};
use crate::{Result as DbErrorResult, SyncedEntity};

use sr_core::{Label, ReferenceItem, ReferenceKind, Story, StoryCustomField};

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

#[derive(sqlx::FromRow)]
struct StoryRow {
    id: i64,
    name: String,
    description: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
    shortcut_url: String,
    active: bool,
}

impl StoryRow {
    fn into_story(self) -> Story {
        Story {
            id: self.id,
            name: self.name,
            description: self.description,
            created: self.created,
            updated: self.updated,
            shortcut_url: self.shortcut_url,
            active: self.active,
            custom_fields: Vec::new(),
            labels: Vec::new(),
            persons: Vec::new(),
            components: Vec::new(),
            epic_groups: Vec::new(),
            products: Vec::new(),
        }
    }
}

const STORY_COLUMNS: &str = "id, name, description, created, updated, shortcut_url, active";

pub struct StoryRepository;

impl StoryRepository {
    /// Every story, active or not, ordered by id
    pub async fn find_all(conn: &mut SqliteConnection) -> DbErrorResult<Vec<Story>> {
        let rows: Vec<StoryRow> =
            sqlx::query_as(&format!("SELECT {STORY_COLUMNS} FROM stories ORDER BY id"))
                .fetch_all(&mut *conn)
                .await?;

        Self::hydrate(conn, rows).await
    }

    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> DbErrorResult<Option<Story>> {
        let row: Option<StoryRow> =
            sqlx::query_as(&format!("SELECT {STORY_COLUMNS} FROM stories WHERE id = ?"))
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;

        match row {
            Some(row) => Ok(Self::hydrate(conn, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Stories with the given ids, ordered by id. Unknown ids are skipped.
    pub async fn find_by_ids(conn: &mut SqliteConnection, ids: &[i64]) -> DbErrorResult<Vec<Story>> {
        let mut rows: Vec<StoryRow> = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(MAX_IN_LIST) {
            let mut qb = QueryBuilder::<Sqlite>::new(format!(
                "SELECT {STORY_COLUMNS} FROM stories WHERE id IN "
            ));
            push_id_list(&mut qb, chunk);
            rows.extend(qb.build_query_as::<StoryRow>().fetch_all(&mut *conn).await?);
        }
        rows.sort_by_key(|r| r.id);

        Self::hydrate(conn, rows).await
    }

    pub async fn exists(conn: &mut SqliteConnection, id: i64) -> DbErrorResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM stories WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(found.is_some())
    }

    /// Mark every story inactive. Returns the number of rows touched.
    pub async fn deactivate_all(conn: &mut SqliteConnection) -> DbErrorResult<u64> {
        let result = sqlx::query("UPDATE stories SET active = 0")
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Link a person, component, epic group or product to a story.
    /// Linking twice is a no-op.
    pub async fn attach(
        conn: &mut SqliteConnection,
        story_id: i64,
        kind: ReferenceKind,
        item_id: i64,
    ) -> DbErrorResult<()> {
        let sql = format!(
            "INSERT OR IGNORE INTO {} (story_id, {}) VALUES (?, ?)",
            kind.association_table(),
            kind.association_column()
        );
        sqlx::query(&sql)
            .bind(story_id)
            .bind(item_id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    /// Remove a link. Returns the number of links removed (0 when absent).
    pub async fn detach(
        conn: &mut SqliteConnection,
        story_id: i64,
        kind: ReferenceKind,
        item_id: i64,
    ) -> DbErrorResult<u64> {
        let sql = format!(
            "DELETE FROM {} WHERE story_id = ? AND {} = ?",
            kind.association_table(),
            kind.association_column()
        );
        let result = sqlx::query(&sql)
            .bind(story_id)
            .bind(item_id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Load every association of `rows` in one query per link table
    async fn hydrate(conn: &mut SqliteConnection, rows: Vec<StoryRow>) -> DbErrorResult<Vec<Story>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

        let mut labels = Self::load_labels(conn, &ids).await?;
        let mut custom_fields = Self::load_custom_fields(conn, &ids).await?;
        let mut references = HashMap::new();
        for kind in ReferenceKind::ALL {
            references.insert(kind, Self::load_references(conn, &ids, kind).await?);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let mut story = row.into_story();
                story.labels = labels.remove(&story.id).unwrap_or_default();
                story.custom_fields = custom_fields.remove(&story.id).unwrap_or_default();
                for (kind, by_story) in references.iter_mut() {
                    *story.references_mut(*kind) = by_story.remove(&story.id).unwrap_or_default();
                }
                story
            })
            .collect())
    }

    async fn load_labels(
        conn: &mut SqliteConnection,
        ids: &[i64],
    ) -> DbErrorResult<HashMap<i64, Vec<Label>>> {
        let mut by_story: HashMap<i64, Vec<Label>> = HashMap::new();
        for chunk in ids.chunks(MAX_IN_LIST) {
            let mut qb = QueryBuilder::<Sqlite>::new(
                r#"
                    SELECT sl.story_id, l.id, l.name
                    FROM story_labels sl
                    JOIN labels l ON l.id = sl.label_id
                    WHERE sl.story_id IN "#,
            );
            push_id_list(&mut qb, chunk);
            qb.push(" ORDER BY l.id");

            let rows: Vec<(i64, i64, String)> = qb.build_query_as().fetch_all(&mut *conn).await?;
            for (story_id, id, name) in rows {
                by_story.entry(story_id).or_default().push(Label { id, name });
            }
        }

        Ok(by_story)
    }

    async fn load_custom_fields(
        conn: &mut SqliteConnection,
        ids: &[i64],
    ) -> DbErrorResult<HashMap<i64, Vec<StoryCustomField>>> {
        let mut by_story: HashMap<i64, Vec<StoryCustomField>> = HashMap::new();
        for chunk in ids.chunks(MAX_IN_LIST) {
            let mut qb = QueryBuilder::<Sqlite>::new(
                r#"
                    SELECT scf.story_id, v.value_id, v.field_id, f.name, v.value
                    FROM story_custom_fields scf
                    JOIN custom_field_values v ON v.value_id = scf.value_id
                    JOIN custom_fields f ON f.id = v.field_id
                    WHERE scf.story_id IN "#,
            );
            push_id_list(&mut qb, chunk);
            qb.push(" ORDER BY scf.story_id, scf.position");

            let rows: Vec<(i64, String, String, String, String)> =
                qb.build_query_as().fetch_all(&mut *conn).await?;
            for (story_id, value_id, field_id, field_name, value) in rows {
                by_story
                    .entry(story_id)
                    .or_default()
                    .push(StoryCustomField {
                        value_id,
                        field_id,
                        field_name,
                        value,
                    });
            }
        }

        Ok(by_story)
    }

    async fn load_references(
        conn: &mut SqliteConnection,
        ids: &[i64],
        kind: ReferenceKind,
    ) -> DbErrorResult<HashMap<i64, Vec<ReferenceItem>>> {
        let mut by_story: HashMap<i64, Vec<ReferenceItem>> = HashMap::new();
        for chunk in ids.chunks(MAX_IN_LIST) {
            let mut qb = QueryBuilder::<Sqlite>::new(format!(
                "SELECT a.story_id, r.id, r.name FROM {} a JOIN {} r ON r.id = a.{} WHERE a.story_id IN ",
                kind.association_table(),
                kind.table(),
                kind.association_column()
            ));
            push_id_list(&mut qb, chunk);
            qb.push(" ORDER BY r.id");

            let rows: Vec<(i64, i64, String)> = qb.build_query_as().fetch_all(&mut *conn).await?;
            for (story_id, id, name) in rows {
                by_story
                    .entry(story_id)
                    .or_default()
                    .push(ReferenceItem { id, name });
            }
        }

        Ok(by_story)
    }

    /// Replace the synced links (labels, custom field values) of a story
    async fn write_synced_links(conn: &mut SqliteConnection, story: &Story) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM story_labels WHERE story_id = ?")
            .bind(story.id)
            .execute(&mut *conn)
            .await?;
        sqlx::query("DELETE FROM story_custom_fields WHERE story_id = ?")
            .bind(story.id)
            .execute(&mut *conn)
            .await?;

        for label in &story.labels {
            sqlx::query("INSERT OR IGNORE INTO story_labels (story_id, label_id) VALUES (?, ?)")
                .bind(story.id)
                .bind(label.id)
                .execute(&mut *conn)
                .await?;
        }

        for (position, field) in story.custom_fields.iter().enumerate() {
            sqlx::query(
                r#"
                    INSERT OR IGNORE INTO story_custom_fields (story_id, value_id, position)
                    VALUES (?, ?, ?)
                "#,
            )
            .bind(story.id)
            .bind(&field.value_id)
            .bind(position as i64)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl SyncedEntity for Story {
    type Id = i64;

    const NAME: &'static str = "stories";

    fn sync_id(&self) -> i64 {
        self.id
    }

    async fn load_ids(conn: &mut SqliteConnection) -> DbErrorResult<Vec<i64>> {
        let ids = sqlx::query_scalar("SELECT id FROM stories")
            .fetch_all(&mut *conn)
            .await?;

        Ok(ids)
    }

    async fn load_all(conn: &mut SqliteConnection) -> DbErrorResult<Vec<Self>> {
        StoryRepository::find_all(conn).await
    }

    async fn insert(conn: &mut SqliteConnection, record: &Self) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO stories (id, name, description, created, updated, shortcut_url, active)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.created)
        .bind(record.updated)
        .bind(&record.shortcut_url)
        .bind(record.active)
        .execute(&mut *conn)
        .await?;

        StoryRepository::write_synced_links(conn, record).await
    }

    /// Persons, components, epic groups and products are left as they are
    async fn update(conn: &mut SqliteConnection, record: &Self) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE stories
                SET name = ?, description = ?, created = ?, updated = ?,
                    shortcut_url = ?, active = ?
                WHERE id = ?
            "#,
        )
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.created)
        .bind(record.updated)
        .bind(&record.shortcut_url)
        .bind(record.active)
        .bind(record.id)
        .execute(&mut *conn)
        .await?;

        StoryRepository::write_synced_links(conn, record).await
    }

    async fn delete(conn: &mut SqliteConnection, id: &i64) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM stories WHERE id = ?")
            .bind(*id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}
