pub mod backlog;
pub mod backlog_response;
pub mod list_backlog_query;
