use crate::ReconcilePlan;

use std::collections::BTreeSet;

use proptest::prelude::*;

#[test]
fn test_plan_with_removal() {
    let plan = ReconcilePlan::compute([1, 2, 3], [2, 3, 4], true);

    assert_eq!(plan.to_add, BTreeSet::from([4]));
    assert_eq!(plan.to_update, BTreeSet::from([2, 3]));
    assert_eq!(plan.to_remove, BTreeSet::from([1]));
    assert!(plan.retained.is_empty());
}

#[test]
fn test_plan_without_removal_retains_missing() {
    let plan = ReconcilePlan::compute([1, 2, 3], [2, 3, 4], false);

    assert!(plan.to_remove.is_empty());
    assert_eq!(plan.retained, BTreeSet::from([1]));
}

#[test]
fn test_plan_ignores_duplicate_incoming_ids() {
    let plan = ReconcilePlan::compute(Vec::<&str>::new(), ["a", "a", "b"], true);

    assert_eq!(plan.to_add, BTreeSet::from(["a", "b"]));
}

proptest! {
    #[test]
    fn prop_plan_partitions_all_ids(
        persisted in proptest::collection::btree_set(0u16..200, 0..60),
        incoming in proptest::collection::btree_set(0u16..200, 0..60),
        remove_missing in any::<bool>(),
    ) {
        let plan = ReconcilePlan::compute(
            persisted.iter().copied(),
            incoming.iter().copied(),
            remove_missing,
        );

        for id in persisted.union(&incoming) {
            let hits = [
                plan.to_add.contains(id),
                plan.to_update.contains(id),
                plan.to_remove.contains(id),
                plan.retained.contains(id),
            ]
            .iter()
            .filter(|hit| **hit)
            .count();
            prop_assert_eq!(hits, 1);
        }

        for id in persisted.difference(&incoming) {
            if remove_missing {
                prop_assert!(plan.to_remove.contains(id));
            } else {
                prop_assert!(plan.retained.contains(id));
            }
        }
        for id in incoming.difference(&persisted) {
            prop_assert!(plan.to_add.contains(id));
        }
        for id in incoming.intersection(&persisted) {
            prop_assert!(plan.to_update.contains(id));
        }
    }
}
