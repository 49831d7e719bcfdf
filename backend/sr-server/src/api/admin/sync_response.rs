use sr_core::SyncSummary;

use serde::Serialize;

/// Result of `/admin/shortcut/backlog`
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub message: String,
    pub total: usize,
    pub skipped_labels: usize,
    pub skipped_custom_fields: usize,
}

impl From<SyncSummary> for SyncResponse {
    fn from(s: SyncSummary) -> Self {
        Self {
            message: s.message(),
            total: s.total,
            skipped_labels: s.skipped_labels,
            skipped_custom_fields: s.skipped_custom_fields,
        }
    }
}
