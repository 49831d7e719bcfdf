use serde::{Deserialize, Serialize};

/// One selectable value of a custom field.
///
/// The field name is not stored here; it is resolved through `field_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldValue {
    pub value_id: String,
    pub field_id: String,
    pub value: String,
}
