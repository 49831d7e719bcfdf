pub mod synced_entity;

use crate::{Result as DbErrorResult, SyncedEntity};

use sr_core::ReconcilePlan;

use std::collections::BTreeMap;

use log::{debug, info};
use sqlx::{SqliteConnection, SqlitePool};

/// Bring the persisted rows of `E` in line with `incoming`.
///
/// Inserts new ids, then deletes ids missing from `incoming` (only when
/// `remove_missing`), then overwrites the rows present on both sides. When an
/// id occurs more than once in `incoming` the last occurrence wins.
///
/// Runs on the caller's connection; pass a transaction to make it atomic.
/// Returns every persisted row after the change.
pub async fn reconcile<E: SyncedEntity>(
    conn: &mut SqliteConnection,
    incoming: &[E],
    remove_missing: bool,
) -> DbErrorResult<Vec<E>> {
    let mut by_id: BTreeMap<E::Id, &E> = BTreeMap::new();
    for record in incoming {
        by_id.insert(record.sync_id(), record);
    }

    let persisted = E::load_ids(conn).await?;
    let plan = ReconcilePlan::compute(persisted, by_id.keys().cloned(), remove_missing);

    debug!(
        "Reconciling {}: {} to add, {} to update, {} to remove, {} retained",
        E::NAME,
        plan.to_add.len(),
        plan.to_update.len(),
        plan.to_remove.len(),
        plan.retained.len()
    );

    for id in &plan.to_add {
        if let Some(record) = by_id.get(id) {
            E::insert(conn, record).await?;
        }
    }

    for id in &plan.to_remove {
        E::delete(conn, id).await?;
    }

    for id in &plan.to_update {
        if let Some(record) = by_id.get(id) {
            E::update(conn, record).await?;
        }
    }

    info!(
        "Reconciled {}: {} added, {} updated, {} removed",
        E::NAME,
        plan.to_add.len(),
        plan.to_update.len(),
        plan.to_remove.len()
    );

    E::load_all(conn).await
}

/// [`reconcile`] inside one transaction with a single commit.
/// On error the transaction is rolled back when dropped.
pub async fn reconcile_atomically<E: SyncedEntity>(
    pool: &SqlitePool,
    incoming: &[E],
    remove_missing: bool,
) -> DbErrorResult<Vec<E>> {
    let mut tx = pool.begin().await?;
    let persisted = reconcile(&mut *tx, incoming, remove_missing).await?;
    tx.commit().await?;

    Ok(persisted)
}
