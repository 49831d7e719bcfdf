pub mod custom_field;
pub mod custom_field_value;
pub mod label;
pub mod reference_item;
pub mod reference_kind;
pub mod story;
pub mod story_custom_field;
