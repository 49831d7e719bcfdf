use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Direction of a single sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[serde(alias = "asc")]
    Forward,
    #[serde(alias = "desc")]
    Reverse,
}

impl SortOrder {
    /// Orient an ascending comparison result
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Forward => ordering,
            Self::Reverse => ordering.reverse(),
        }
    }
}
