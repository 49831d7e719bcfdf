use crate::RemoteLabel;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A story's reference to one custom field value
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteStoryCustomField {
    pub field_id: String,
    pub value_id: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Story as returned by `/search/stories`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteStory {
    pub id: i64,
    pub name: String,
    pub app_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Vec<RemoteLabel>,
    #[serde(default)]
    pub custom_fields: Vec<RemoteStoryCustomField>,
}
