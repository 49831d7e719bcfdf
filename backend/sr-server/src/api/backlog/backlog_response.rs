use crate::StoryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BacklogResponse {
    pub items: Vec<StoryDto>,
    /// Stories matching the filters, before offset/limit
    pub count: usize,
    /// Every stored story, inactive ones included
    pub total: i64,
}
