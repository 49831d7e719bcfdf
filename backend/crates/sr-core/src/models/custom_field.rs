use crate::CustomFieldValue;

use serde::{Deserialize, Serialize};

/// Custom field definition together with the values it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: String,
    pub name: String,
    pub values: Vec<CustomFieldValue>,
}

impl CustomField {
    /// Find one of this field's values by its external identifier
    pub fn value(&self, value_id: &str) -> Option<&CustomFieldValue> {
        self.values.iter().find(|v| v.value_id == value_id)
    }
}
