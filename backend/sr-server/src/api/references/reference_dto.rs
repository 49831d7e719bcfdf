use sr_core::ReferenceItem;

use serde::Serialize;

/// Person, component, epic group or product as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceDto {
    pub id: i64,
    pub name: String,
}

impl From<ReferenceItem> for ReferenceDto {
    fn from(item: ReferenceItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
        }
    }
}
