pub mod reconcile_plan;
pub mod sync_summary;
