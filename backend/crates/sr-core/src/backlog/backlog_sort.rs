//! Backlog ordering.
//!
//! All requested keys are combined into one comparator and applied in a
//! single sort. Key precedence, first differing key wins:
//!
//! 1. period (ordinal rank)
//! 2. priority (ordinal rank)
//! 3. name
//! 4. id
//! 5. created
//! 6. updated
//!
//! Keys that were not requested are skipped. Remaining ties fall back to
//! ascending id so the output is deterministic.

use crate::{SortOrder, Story, period_rank, priority_rank};

use std::cmp::Ordering;

type KeyComparator = fn(&Story, &Story) -> Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacklogSort {
    pub name: Option<SortOrder>,
    pub id: Option<SortOrder>,
    pub created: Option<SortOrder>,
    pub updated: Option<SortOrder>,
    pub priority: Option<SortOrder>,
    pub period: Option<SortOrder>,
}

impl BacklogSort {
    pub fn is_empty(&self) -> bool {
        self.keys().iter().all(|(order, _)| order.is_none())
    }

    fn keys(&self) -> [(Option<SortOrder>, KeyComparator); 6] {
        [
            (self.period, |a: &Story, b: &Story| {
                period_rank(a.period()).cmp(&period_rank(b.period()))
            }),
            (self.priority, |a: &Story, b: &Story| {
                priority_rank(a.priority()).cmp(&priority_rank(b.priority()))
            }),
            (self.name, |a: &Story, b: &Story| a.name.cmp(&b.name)),
            (self.id, |a: &Story, b: &Story| a.id.cmp(&b.id)),
            (self.created, |a: &Story, b: &Story| a.created.cmp(&b.created)),
            (self.updated, |a: &Story, b: &Story| a.updated.cmp(&b.updated)),
        ]
    }

    pub fn compare(&self, a: &Story, b: &Story) -> Ordering {
        self.keys()
            .iter()
            .filter_map(|(order, cmp)| order.map(|o| o.apply(cmp(a, b))))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.id.cmp(&b.id))
    }

    pub fn sort(&self, stories: &mut [Story]) {
        stories.sort_by(|a, b| self.compare(a, b));
    }
}
