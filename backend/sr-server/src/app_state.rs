use sr_shortcut::BacklogSource;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Where backlog syncs read stories, labels and custom fields from
    pub source: Arc<dyn BacklogSource>,
    /// Workflow state whose stories make up the backlog
    pub backlog_state: String,
}
