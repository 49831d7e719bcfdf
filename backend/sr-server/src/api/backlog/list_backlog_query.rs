use sr_core::{BacklogFilter, BacklogSort, FieldFilter, SortOrder};

use serde::Deserialize;

/// Query parameters for `GET /shortcut/backlog`
#[derive(Debug, Default, Deserialize)]
pub struct ListBacklogQuery {
    /// Case-insensitive substring of name or description
    pub q: Option<String>,

    #[serde(rename = "filter[priority]")]
    pub priority: Option<String>,
    #[serde(rename = "filter[period]")]
    pub period: Option<String>,
    #[serde(rename = "filter[label]")]
    pub label: Option<String>,

    #[serde(rename = "sort[name]")]
    pub sort_name: Option<SortOrder>,
    #[serde(rename = "sort[id]")]
    pub sort_id: Option<SortOrder>,
    #[serde(rename = "sort[created]")]
    pub sort_created: Option<SortOrder>,
    #[serde(rename = "sort[updated]")]
    pub sort_updated: Option<SortOrder>,
    #[serde(rename = "sort[priority]")]
    pub sort_priority: Option<SortOrder>,
    #[serde(rename = "sort[period]")]
    pub sort_period: Option<SortOrder>,

    /// Also return stories missing from the latest sync
    #[serde(default)]
    pub include_inactive: bool,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl ListBacklogQuery {
    pub fn filter(&self) -> BacklogFilter {
        BacklogFilter {
            q: self.q.clone().filter(|q| !q.is_empty()),
            priority: self.priority.as_deref().map(FieldFilter::parse),
            period: self.period.as_deref().map(FieldFilter::parse),
            label: self.label.clone(),
            include_inactive: self.include_inactive,
        }
    }

    pub fn sort(&self) -> BacklogSort {
        BacklogSort {
            name: self.sort_name,
            id: self.sort_id,
            created: self.sort_created,
            updated: self.sort_updated,
            priority: self.sort_priority,
            period: self.sort_period,
        }
    }
}
