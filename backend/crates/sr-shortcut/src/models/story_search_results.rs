use crate::RemoteStory;

use serde::Deserialize;

/// One page of `/search/stories`
#[derive(Debug, Clone, Deserialize)]
pub struct StorySearchResults {
    pub data: Vec<RemoteStory>,
    /// Link to the following page, absent on the last one
    #[serde(default)]
    pub next: Option<String>,
    /// Matching stories across all pages
    #[serde(default)]
    pub total: i64,
}
