use sr_core::{CustomField, CustomFieldValue};

use serde::Serialize;

/// Custom field with its selectable values, in stored order
#[derive(Debug, Serialize)]
pub struct CustomFieldDto {
    pub id: String,
    pub name: String,
    pub values: Vec<CustomFieldValueDto>,
}

#[derive(Debug, Serialize)]
pub struct CustomFieldValueDto {
    pub id: String,
    pub value: String,
}

impl From<CustomField> for CustomFieldDto {
    fn from(f: CustomField) -> Self {
        Self {
            id: f.id,
            name: f.name,
            values: f.values.into_iter().map(CustomFieldValueDto::from).collect(),
        }
    }
}

impl From<CustomFieldValue> for CustomFieldValueDto {
    fn from(v: CustomFieldValue) -> Self {
        Self {
            id: v.value_id,
            value: v.value,
        }
    }
}
