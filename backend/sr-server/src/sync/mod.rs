pub mod backlog_sync;
pub mod error;
pub mod story_builder;

pub use backlog_sync::{sync_backlog, sync_custom_fields, sync_labels};
pub use error::{Result as SyncResult, SyncError};
pub use story_builder::StoryBuilder;
