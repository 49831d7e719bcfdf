use crate::sync::StoryBuilder;

use sr_core::{CustomField, CustomFieldValue, Label};
use sr_shortcut::{RemoteLabel, RemoteStory, RemoteStoryCustomField};

use chrono::{TimeZone, Utc};

fn labels() -> Vec<Label> {
    vec![Label::new(1, "backend"), Label::new(2, "frontend")]
}

fn fields() -> Vec<CustomField> {
    vec![CustomField {
        id: "field-priority".into(),
        name: "Priority".into(),
        values: vec![
            CustomFieldValue {
                value_id: "priority-high".into(),
                field_id: "field-priority".into(),
                value: "High".into(),
            },
            CustomFieldValue {
                value_id: "priority-low".into(),
                field_id: "field-priority".into(),
                value: "Low".into(),
            },
        ],
    }]
}

fn remote_story(id: i64) -> RemoteStory {
    RemoteStory {
        id,
        name: format!("Story {id}"),
        app_url: format!("https://app.shortcut.com/acme/story/{id}"),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        description: None,
        labels: Vec::new(),
        custom_fields: Vec::new(),
    }
}

fn remote_label(id: i64, name: &str) -> RemoteLabel {
    RemoteLabel {
        id,
        name: name.into(),
    }
}

fn remote_value(value_id: &str) -> RemoteStoryCustomField {
    RemoteStoryCustomField {
        field_id: "field-priority".into(),
        value_id: value_id.into(),
        value: None,
    }
}

#[test]
fn test_build_copies_story_fields_and_marks_active() {
    let mut builder = StoryBuilder::new(&labels(), &fields());
    let mut remote = remote_story(10);
    remote.description = Some("Login page".into());

    let story = builder.build(&remote);

    assert_eq!(story.id, 10);
    assert_eq!(story.name, "Story 10");
    assert_eq!(story.description, "Login page");
    assert_eq!(story.shortcut_url, "https://app.shortcut.com/acme/story/10");
    assert_eq!(story.created, remote.created_at);
    assert_eq!(story.updated, remote.updated_at);
    assert!(story.active);
    assert!(story.persons.is_empty());
    assert!(story.products.is_empty());
}

#[test]
fn test_missing_description_becomes_empty() {
    let mut builder = StoryBuilder::new(&labels(), &fields());

    let story = builder.build(&remote_story(1));

    assert_eq!(story.description, "");
}

#[test]
fn test_resolves_labels_and_custom_field_values() {
    let mut builder = StoryBuilder::new(&labels(), &fields());
    let mut remote = remote_story(1);
    remote.labels = vec![remote_label(2, "frontend"), remote_label(1, "backend")];
    remote.custom_fields = vec![remote_value("priority-high")];

    let story = builder.build(&remote);

    assert_eq!(story.label_names(), vec!["frontend", "backend"]);
    assert_eq!(story.priority(), Some("High"));
    assert_eq!(story.custom_fields[0].field_name, "Priority");
    let summary = builder.into_summary();
    assert_eq!(summary.skipped_labels, 0);
    assert_eq!(summary.skipped_custom_fields, 0);
}

#[test]
fn test_unknown_references_are_skipped_and_counted() {
    let mut builder = StoryBuilder::new(&labels(), &fields());
    let mut remote = remote_story(1);
    remote.labels = vec![remote_label(1, "backend"), remote_label(99, "ghost")];
    remote.custom_fields = vec![remote_value("priority-gone"), remote_value("priority-low")];

    let story = builder.build(&remote);

    assert_eq!(story.label_names(), vec!["backend"]);
    assert_eq!(story.custom_fields.len(), 1);
    assert_eq!(story.priority(), Some("Low"));

    let summary = builder.into_summary();
    assert_eq!(summary.total, 1);
    assert_eq!(summary.skipped_labels, 1);
    assert_eq!(summary.skipped_custom_fields, 1);
}

#[test]
fn test_duplicate_references_are_collapsed() {
    let mut builder = StoryBuilder::new(&labels(), &fields());
    let mut remote = remote_story(1);
    remote.labels = vec![remote_label(1, "backend"), remote_label(1, "backend")];
    remote.custom_fields = vec![remote_value("priority-high"), remote_value("priority-high")];

    let story = builder.build(&remote);

    assert_eq!(story.labels.len(), 1);
    assert_eq!(story.custom_fields.len(), 1);
}

#[test]
fn test_summary_counts_every_built_story() {
    let mut builder = StoryBuilder::new(&[], &[]);

    builder.build(&remote_story(1));
    builder.build(&remote_story(2));
    builder.build(&remote_story(3));

    let summary = builder.into_summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.message(), "3 stories imported");
}
