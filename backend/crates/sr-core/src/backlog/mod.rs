pub mod backlog_filter;
pub mod backlog_sort;
pub mod custom_field_lookup;
pub mod sort_order;
