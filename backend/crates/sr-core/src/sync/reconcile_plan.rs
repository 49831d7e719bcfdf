use std::collections::BTreeSet;

/// Identifier sets for reconciling a persisted collection against a freshly
/// fetched one.
///
/// The four sets are disjoint and together cover every identifier seen on
/// either side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilePlan<I: Ord> {
    /// Incoming but not persisted
    pub to_add: BTreeSet<I>,
    /// Present on both sides
    pub to_update: BTreeSet<I>,
    /// Persisted but not incoming, and removal is enabled
    pub to_remove: BTreeSet<I>,
    /// Persisted but not incoming, and removal is disabled
    pub retained: BTreeSet<I>,
}

impl<I: Ord + Clone> ReconcilePlan<I> {
    pub fn compute<P, N>(persisted: P, incoming: N, remove_missing: bool) -> Self
    where
        P: IntoIterator<Item = I>,
        N: IntoIterator<Item = I>,
    {
        let persisted: BTreeSet<I> = persisted.into_iter().collect();
        let incoming: BTreeSet<I> = incoming.into_iter().collect();

        let to_add = incoming.difference(&persisted).cloned().collect();
        let to_update = incoming.intersection(&persisted).cloned().collect();
        let missing: BTreeSet<I> = persisted.difference(&incoming).cloned().collect();

        let (to_remove, retained) = if remove_missing {
            (missing, BTreeSet::new())
        } else {
            (BTreeSet::new(), missing)
        };

        Self {
            to_add,
            to_update,
            to_remove,
            retained,
        }
    }
}
