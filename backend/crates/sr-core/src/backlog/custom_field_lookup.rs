//! Derived story attributes.
//!
//! Priority and period are not stored on a story. They are looked up on
//! every access by scanning the story's custom field links for a field with
//! a fixed name, and ranked through fixed ordinal tables for sorting.

use crate::StoryCustomField;

/// Custom field holding the story priority
pub const PRIORITY_FIELD: &str = "Priority";

/// Custom field holding the planning period
pub const PERIOD_FIELD: &str = "Periodsplanering";

/// Return the value of the first link whose field is named `field_name`
pub fn custom_field_value<'a>(fields: &'a [StoryCustomField], field_name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|f| f.field_name == field_name)
        .map(|f| f.value.as_str())
}

/// Higher rank means more important. Unknown and missing values rank lowest.
pub fn priority_rank(priority: Option<&str>) -> u8 {
    match priority {
        Some("High") => 4,
        Some("Medium") => 3,
        Some("Low") => 2,
        _ => 1,
    }
}

/// Chronological rank of a planning period. Unknown and missing values rank last.
pub fn period_rank(period: Option<&str>) -> u8 {
    match period {
        Some("P1 2024") => 1,
        Some("P2 2024") => 2,
        Some("P3 2024") => 3,
        Some("Kanske nästa period") => 4,
        Some("Kanske efter nästa period") => 5,
        _ => 6,
    }
}
