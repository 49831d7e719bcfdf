use serde::{Deserialize, Serialize};

/// Locally administered row (person, component, epic group or product)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub id: i64,
    pub name: String,
}
