pub mod backlog;
pub mod error;
pub mod models;
pub mod sync;


pub use backlog::backlog_filter::{BacklogFilter, FieldFilter, is_empty_sentinel};
pub use backlog::backlog_sort::BacklogSort;
pub use backlog::custom_field_lookup::{
    PERIOD_FIELD, PRIORITY_FIELD, custom_field_value, period_rank, priority_rank,
};
pub use backlog::sort_order::SortOrder;
pub use error::{CoreError, Result};
pub use models::custom_field::CustomField;
pub use models::custom_field_value::CustomFieldValue;
pub use models::label::Label;
pub use models::reference_item::ReferenceItem;
pub use models::reference_kind::ReferenceKind;
pub use models::story::Story;
pub use models::story_custom_field::StoryCustomField;
pub use sync::reconcile_plan::ReconcilePlan;
pub use sync::sync_summary::SyncSummary;
