//! Client for the Shortcut REST API (v3).
//!
//! Only the read endpoints the backlog sync needs are covered: story search,
//! labels and custom fields.

pub(crate) mod backlog_source;
pub(crate) mod client;
pub(crate) mod models;


pub use backlog_source::BacklogSource;
pub use client::{ShortcutClient, ShortcutError, ShortcutResult, next_page_token};
pub use models::{
    RemoteCustomField, RemoteCustomFieldValue, RemoteLabel, RemoteStory, RemoteStoryCustomField,
    StorySearchResults,
};
