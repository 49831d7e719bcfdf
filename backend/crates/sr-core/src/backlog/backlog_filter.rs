use serde::{Deserialize, Serialize};

/// Filter values meaning "the story has no value for this field"
const EMPTY_SENTINELS: [&str; 4] = ["", "null", "none", "saknas"];

/// Whether a raw filter value asks for stories without the field
pub fn is_empty_sentinel(raw: &str) -> bool {
    let lowered = raw.trim().to_lowercase();
    EMPTY_SENTINELS.contains(&lowered.as_str())
}

/// Filter on a derived custom field (priority or period)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldFilter {
    /// Story has no link to a value of the field
    Missing,
    /// Story's value for the field equals this, ignoring case
    Matches(String),
}

impl FieldFilter {
    pub fn parse(raw: &str) -> Self {
        if is_empty_sentinel(raw) {
            Self::Missing
        } else {
            Self::Matches(raw.to_string())
        }
    }
}

/// All backlog filters. Every present filter must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BacklogFilter {
    /// Case-insensitive substring of name or description
    pub q: Option<String>,
    pub priority: Option<FieldFilter>,
    pub period: Option<FieldFilter>,
    /// Exact label name
    pub label: Option<String>,
    /// Also consider stories missing from the latest sync
    pub include_inactive: bool,
}
