use serde::Serialize;

/// Body returned by every DELETE on a reference collection
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted(name: &str) -> Self {
        Self {
            message: format!("Deleted {} successfully", name),
        }
    }
}
