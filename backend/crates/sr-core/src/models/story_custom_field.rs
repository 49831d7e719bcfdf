use serde::{Deserialize, Serialize};

/// A story's link to a custom field value, projected with the field name and
/// payload it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryCustomField {
    pub value_id: String,
    pub field_id: String,
    pub field_name: String,
    pub value: String,
}
