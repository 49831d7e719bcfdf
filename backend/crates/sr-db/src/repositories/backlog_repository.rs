use crate::{Result as DbErrorResult, StoryRepository};

use sr_core::{BacklogFilter, FieldFilter, PERIOD_FIELD, PRIORITY_FIELD, Story};

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

/// Stories matching a [`BacklogFilter`], unsorted (ordered by id)
#[derive(Debug, Clone)]
pub struct BacklogQueryResult {
    pub stories: Vec<Story>,
    /// Every stored story, active or not, regardless of the filter
    pub total: i64,
}

pub struct BacklogRepository;

impl BacklogRepository {
    pub async fn query(
        conn: &mut SqliteConnection,
        filter: &BacklogFilter,
    ) -> DbErrorResult<BacklogQueryResult> {
        let total = Self::count_all(conn).await?;

        let mut qb = QueryBuilder::<Sqlite>::new("SELECT s.id FROM stories s WHERE 1 = 1");

        if !filter.include_inactive {
            qb.push(" AND s.active = 1");
        }

        if let Some(q) = filter.q.as_deref().filter(|q| !q.is_empty()) {
            let pattern = format!("%{}%", escape_like(q));
            qb.push(" AND (s.name LIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" ESCAPE '\\' OR s.description LIKE ");
            qb.push_bind(pattern);
            qb.push(" ESCAPE '\\')");
        }

        if let Some(priority) = &filter.priority {
            push_field_filter(&mut qb, PRIORITY_FIELD, priority);
        }

        if let Some(period) = &filter.period {
            push_field_filter(&mut qb, PERIOD_FIELD, period);
        }

        if let Some(label) = &filter.label {
            qb.push(
                r#" AND EXISTS (
                    SELECT 1 FROM story_labels sl
                    JOIN labels l ON l.id = sl.label_id
                    WHERE sl.story_id = s.id AND l.name = "#,
            );
            qb.push_bind(label.clone());
            qb.push(")");
        }

        qb.push(" ORDER BY s.id");

        let ids: Vec<i64> = qb
            .build_query_scalar()
            .fetch_all(&mut *conn)
            .await?;

        let stories = StoryRepository::find_by_ids(conn, &ids).await?;

        Ok(BacklogQueryResult { stories, total })
    }

    async fn count_all(conn: &mut SqliteConnection) -> DbErrorResult<i64> {
        let total = sqlx::query_scalar("SELECT COUNT(*) FROM stories")
            .fetch_one(&mut *conn)
            .await?;

        Ok(total)
    }
}

/// `Missing` becomes NOT EXISTS on a value of the named field,
/// `Matches` an EXISTS with a case-insensitive value comparison.
fn push_field_filter(qb: &mut QueryBuilder<'_, Sqlite>, field_name: &str, filter: &FieldFilter) {
    const FIELD_VALUE_EXISTS: &str = r#"EXISTS (
        SELECT 1 FROM story_custom_fields scf
        JOIN custom_field_values v ON v.value_id = scf.value_id
        JOIN custom_fields f ON f.id = v.field_id
        WHERE scf.story_id = s.id AND f.name = "#;

    match filter {
        FieldFilter::Missing => {
            qb.push(" AND NOT ");
            qb.push(FIELD_VALUE_EXISTS);
            qb.push_bind(field_name.to_string());
            qb.push(")");
        }
        FieldFilter::Matches(value) => {
            qb.push(" AND ");
            qb.push(FIELD_VALUE_EXISTS);
            qb.push_bind(field_name.to_string());
            qb.push(" AND LOWER(v.value) = LOWER(");
            qb.push_bind(value.clone());
            qb.push("))");
        }
    }
}

/// Escape LIKE wildcards so user input matches literally
pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
