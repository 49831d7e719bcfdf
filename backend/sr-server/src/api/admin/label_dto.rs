use sr_core::Label;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LabelDto {
    pub id: i64,
    pub name: String,
}

impl From<Label> for LabelDto {
    fn from(l: Label) -> Self {
        Self {
            id: l.id,
            name: l.name,
        }
    }
}
