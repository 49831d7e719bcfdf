use sr_core::{CustomField, CustomFieldValue};

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteCustomFieldValue {
    pub id: String,
    pub value: String,
}

/// Custom field definition from `/custom-fields`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteCustomField {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub values: Vec<RemoteCustomFieldValue>,
}

impl From<RemoteCustomField> for CustomField {
    fn from(remote: RemoteCustomField) -> Self {
        let values = remote
            .values
            .into_iter()
            .map(|v| CustomFieldValue {
                value_id: v.id,
                field_id: remote.id.clone(),
                value: v.value,
            })
            .collect();

        CustomField {
            id: remote.id,
            name: remote.name,
            values,
        }
    }
}
