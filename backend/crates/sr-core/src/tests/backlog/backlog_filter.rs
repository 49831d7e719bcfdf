use crate::{FieldFilter, is_empty_sentinel};

#[test]
fn test_empty_sentinels() {
    for raw in ["", "null", "NULL", "None", "none", "saknas", "Saknas", "  "] {
        assert!(is_empty_sentinel(raw), "{raw:?}");
    }
}

#[test]
fn test_regular_values_are_not_sentinels() {
    for raw in ["High", "P1 2024", "nullish", "0"] {
        assert!(!is_empty_sentinel(raw), "{raw:?}");
    }
}

#[test]
fn test_field_filter_parse() {
    assert_eq!(FieldFilter::parse("saknas"), FieldFilter::Missing);
    assert_eq!(
        FieldFilter::parse("high"),
        FieldFilter::Matches("high".to_string())
    );
}
