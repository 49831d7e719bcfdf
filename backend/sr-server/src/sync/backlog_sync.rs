//! Pull labels, custom fields and backlog stories from a [`BacklogSource`]
//! into the local store.

use crate::sync::{StoryBuilder, SyncResult};

use sr_core::{CustomField, Label, Story, SyncSummary};
use sr_db::{StoryRepository, reconcile, reconcile_atomically};
use sr_shortcut::BacklogSource;

use log::info;
use sqlx::SqlitePool;

async fn fetch_labels(source: &dyn BacklogSource) -> SyncResult<Vec<Label>> {
    let labels: Vec<Label> = source
        .fetch_labels()
        .await?
        .into_iter()
        .map(Label::from)
        .collect();
    info!("Fetched {} labels", labels.len());

    Ok(labels)
}

async fn fetch_custom_fields(source: &dyn BacklogSource) -> SyncResult<Vec<CustomField>> {
    let fields: Vec<CustomField> = source
        .fetch_custom_fields()
        .await?
        .into_iter()
        .map(CustomField::from)
        .collect();
    info!("Fetched {} custom fields", fields.len());

    Ok(fields)
}

/// Fetch every label and hard-replace the local label set with it
pub async fn sync_labels(pool: &SqlitePool, source: &dyn BacklogSource) -> SyncResult<Vec<Label>> {
    let incoming = fetch_labels(source).await?;
    Ok(reconcile_atomically(pool, &incoming, true).await?)
}

/// Fetch every custom field with its values and hard-replace the local set
pub async fn sync_custom_fields(
    pool: &SqlitePool,
    source: &dyn BacklogSource,
) -> SyncResult<Vec<CustomField>> {
    let incoming = fetch_custom_fields(source).await?;
    Ok(reconcile_atomically(pool, &incoming, true).await?)
}

/// Full backlog sync.
///
/// Labels, custom fields and every non-archived story in `state` are fetched
/// before anything is written; a failed fetch leaves the store untouched.
/// Then, in one transaction, labels and custom fields are hard-replaced, all
/// stored stories are marked inactive and the fetched ones are written back
/// as active. Stories that were not fetched stay inactive; nothing is deleted.
pub async fn sync_backlog(
    pool: &SqlitePool,
    source: &dyn BacklogSource,
    state: &str,
) -> SyncResult<SyncSummary> {
    info!("Starting backlog sync for state '{}'", state);

    let incoming_labels = fetch_labels(source).await?;
    let incoming_fields = fetch_custom_fields(source).await?;
    let remote = source.fetch_stories(state, -1).await?;
    info!("Fetched {} stories", remote.len());

    let mut tx = pool.begin().await?;
    let labels = reconcile(&mut *tx, &incoming_labels, true).await?;
    let fields = reconcile(&mut *tx, &incoming_fields, true).await?;

    let mut builder = StoryBuilder::new(&labels, &fields);
    let incoming: Vec<Story> = remote.iter().map(|story| builder.build(story)).collect();

    let deactivated = StoryRepository::deactivate_all(&mut *tx).await?;
    let stored = reconcile(&mut *tx, &incoming, false).await?;
    tx.commit().await?;

    let summary = builder.into_summary();
    info!(
        "Backlog sync done: {} imported, {} previously stored, {} of {} now active, {} label and {} custom field references skipped",
        summary.total,
        deactivated,
        stored.iter().filter(|s| s.active).count(),
        stored.len(),
        summary.skipped_labels,
        summary.skipped_custom_fields
    );

    Ok(summary)
}
