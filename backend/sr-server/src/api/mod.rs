pub mod admin;
pub mod backlog;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod references;
pub mod resolve;
pub mod stories;
