pub(crate) mod remote_custom_field;
pub(crate) mod remote_label;
pub(crate) mod remote_story;
pub(crate) mod story_search_results;

pub use remote_custom_field::{RemoteCustomField, RemoteCustomFieldValue};
pub use remote_label::RemoteLabel;
pub use remote_story::{RemoteStory, RemoteStoryCustomField};
pub use story_search_results::StorySearchResults;
