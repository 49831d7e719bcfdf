use crate::{
    Label, PERIOD_FIELD, PRIORITY_FIELD, ReferenceItem, ReferenceKind, StoryCustomField,
    custom_field_value,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Identifier assigned by the project-tracking API
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub shortcut_url: String,

    /// False when the story was missing from the latest sync
    pub active: bool,

    // Synced associations
    pub custom_fields: Vec<StoryCustomField>,
    pub labels: Vec<Label>,

    // Local associations
    pub persons: Vec<ReferenceItem>,
    pub components: Vec<ReferenceItem>,
    pub epic_groups: Vec<ReferenceItem>,
    pub products: Vec<ReferenceItem>,
}

impl Story {
    pub fn priority(&self) -> Option<&str> {
        custom_field_value(&self.custom_fields, PRIORITY_FIELD)
    }

    pub fn period(&self) -> Option<&str> {
        custom_field_value(&self.custom_fields, PERIOD_FIELD)
    }

    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.name.clone()).collect()
    }

    pub fn references_mut(&mut self, kind: ReferenceKind) -> &mut Vec<ReferenceItem> {
        match kind {
            ReferenceKind::Person => &mut self.persons,
            ReferenceKind::Component => &mut self.components,
            ReferenceKind::EpicGroup => &mut self.epic_groups,
            ReferenceKind::Product => &mut self.products,
        }
    }
}
