pub mod reference_dto;
pub mod reference_request;
pub mod references;
