use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sr_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a person/component/epic group/product row directly
pub async fn insert_reference(pool: &SqlitePool, table: &str, name: &str) -> i64 {
    let sql = format!("INSERT INTO {table} (name) VALUES (?)");
    sqlx::query(&sql)
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to insert reference row")
        .last_insert_rowid()
}
