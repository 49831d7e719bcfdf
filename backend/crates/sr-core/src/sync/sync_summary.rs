use serde::Serialize;

/// Outcome of a backlog sync run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    /// Stories written as active
    pub total: usize,
    /// Label references dropped because the label is unknown locally
    pub skipped_labels: usize,
    /// Custom field references dropped because the value is unknown locally
    pub skipped_custom_fields: usize,
}

impl SyncSummary {
    pub fn message(&self) -> String {
        format!("{} stories imported", self.total)
    }
}
