pub mod admin;
pub mod custom_field_dto;
pub mod label_dto;
pub mod sync_response;
