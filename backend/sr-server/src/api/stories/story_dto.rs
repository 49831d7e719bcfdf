use crate::ReferenceDto;

use sr_core::Story;

use serde::Serialize;

/// Story as returned by the backlog and story endpoints.
///
/// `priority` and `period` are derived from the story's custom field links.
#[derive(Debug, Clone, Serialize)]
pub struct StoryDto {
    pub id: i64,
    pub name: String,
    pub shortcut_url: String,
    pub description: String,
    pub created: String,
    pub updated: String,
    pub active: bool,
    pub label_names: Vec<String>,
    pub priority: Option<String>,
    pub period: Option<String>,
    pub persons: Vec<ReferenceDto>,
    pub components: Vec<ReferenceDto>,
    pub epic_groups: Vec<ReferenceDto>,
    pub products: Vec<ReferenceDto>,
}

impl From<Story> for StoryDto {
    fn from(s: Story) -> Self {
        let label_names = s.label_names();
        let priority = s.priority().map(str::to_string);
        let period = s.period().map(str::to_string);

        Self {
            id: s.id,
            name: s.name,
            shortcut_url: s.shortcut_url,
            description: s.description,
            created: s.created.to_rfc3339(),
            updated: s.updated.to_rfc3339(),
            active: s.active,
            label_names,
            priority,
            period,
            persons: s.persons.into_iter().map(ReferenceDto::from).collect(),
            components: s.components.into_iter().map(ReferenceDto::from).collect(),
            epic_groups: s.epic_groups.into_iter().map(ReferenceDto::from).collect(),
            products: s.products.into_iter().map(ReferenceDto::from).collect(),
        }
    }
}
