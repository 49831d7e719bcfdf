pub mod backlog_repository;
pub mod custom_field_repository;
pub mod label_repository;
pub mod reference_repository;
pub mod story_repository;

use sqlx::{QueryBuilder, Sqlite};

/// Upper bound on ids bound into one `IN (...)` list
pub(crate) const MAX_IN_LIST: usize = 500;

/// Append `(?, ?, ...)` with one bind per id
pub(crate) fn push_id_list(qb: &mut QueryBuilder<'_, Sqlite>, ids: &[i64]) {
    qb.push("(");
    let mut separated = qb.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");
}
