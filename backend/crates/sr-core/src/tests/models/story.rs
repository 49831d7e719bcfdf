use crate::tests::{field, story, story_with_fields};
use crate::{Label, ReferenceItem, ReferenceKind};

#[test]
fn test_priority_and_period_are_derived_from_custom_fields() {
    let s = story_with_fields(
        1,
        vec![
            field("Estimate", "3"),
            field("Priority", "High"),
            field("Periodsplanering", "P2 2024"),
        ],
    );

    assert_eq!(s.priority(), Some("High"));
    assert_eq!(s.period(), Some("P2 2024"));
}

#[test]
fn test_priority_is_none_without_matching_field() {
    let s = story_with_fields(1, vec![field("Estimate", "3")]);

    assert_eq!(s.priority(), None);
    assert_eq!(s.period(), None);
}

#[test]
fn test_priority_follows_custom_field_changes() {
    let mut s = story_with_fields(1, vec![field("Priority", "Low")]);
    assert_eq!(s.priority(), Some("Low"));

    s.custom_fields = vec![field("Priority", "Medium")];
    assert_eq!(s.priority(), Some("Medium"));
}

#[test]
fn test_label_names_keep_order() {
    let mut s = story(1, "With labels");
    s.labels = vec![Label::new(2, "backend"), Label::new(1, "ux")];

    assert_eq!(s.label_names(), vec!["backend".to_string(), "ux".to_string()]);
}

#[test]
fn test_references_by_kind() {
    let mut s = story(1, "Refs");
    s.references_mut(ReferenceKind::Product).push(ReferenceItem {
        id: 7,
        name: "Portal".into(),
    });

    assert_eq!(s.products.len(), 1);
    assert!(s.persons.is_empty());
}
