use crate::{RemoteCustomField, RemoteLabel, RemoteStory, ShortcutResult};

use async_trait::async_trait;

/// Where the backlog sync reads from. Implemented by [`ShortcutClient`];
/// tests can substitute their own.
///
/// [`ShortcutClient`]: crate::ShortcutClient
#[async_trait]
pub trait BacklogSource: Send + Sync {
    /// See [`ShortcutClient::fetch_stories`](crate::ShortcutClient::fetch_stories)
    async fn fetch_stories(&self, state: &str, limit: i64) -> ShortcutResult<Vec<RemoteStory>>;

    async fn fetch_labels(&self) -> ShortcutResult<Vec<RemoteLabel>>;

    async fn fetch_custom_fields(&self) -> ShortcutResult<Vec<RemoteCustomField>>;
}
