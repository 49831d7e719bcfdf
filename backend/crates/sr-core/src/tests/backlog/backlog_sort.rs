use crate::tests::{at, field, story, story_with_fields};
use crate::{BacklogSort, SortOrder, Story};

fn ids(stories: &[Story]) -> Vec<i64> {
    stories.iter().map(|s| s.id).collect()
}

#[test]
fn test_no_keys_sorts_by_id() {
    let mut stories = vec![story(3, "c"), story(1, "a"), story(2, "b")];

    BacklogSort::default().sort(&mut stories);

    assert!(BacklogSort::default().is_empty());
    assert_eq!(ids(&stories), vec![1, 2, 3]);
}

#[test]
fn test_priority_reverse_puts_high_first_regardless_of_row_order() {
    let mut stories = vec![
        story_with_fields(1, vec![field("Priority", "Low")]),
        story_with_fields(2, vec![]),
        story_with_fields(3, vec![field("Priority", "High")]),
        story_with_fields(4, vec![field("Priority", "Medium")]),
        story_with_fields(5, vec![field("Priority", "Whenever")]),
    ];
    let sort = BacklogSort {
        priority: Some(SortOrder::Reverse),
        ..Default::default()
    };

    sort.sort(&mut stories);

    assert_eq!(ids(&stories), vec![3, 4, 1, 2, 5]);
}

#[test]
fn test_period_forward_uses_ordinal_table() {
    let mut stories = vec![
        story_with_fields(1, vec![field("Periodsplanering", "Kanske nästa period")]),
        story_with_fields(2, vec![field("Periodsplanering", "P3 2024")]),
        story_with_fields(3, vec![]),
        story_with_fields(4, vec![field("Periodsplanering", "P1 2024")]),
    ];
    let sort = BacklogSort {
        period: Some(SortOrder::Forward),
        ..Default::default()
    };

    sort.sort(&mut stories);

    assert_eq!(ids(&stories), vec![4, 2, 1, 3]);
}

#[test]
fn test_period_takes_precedence_over_priority() {
    let mut stories = vec![
        story_with_fields(
            1,
            vec![field("Priority", "High"), field("Periodsplanering", "P2 2024")],
        ),
        story_with_fields(
            2,
            vec![field("Priority", "Low"), field("Periodsplanering", "P1 2024")],
        ),
        story_with_fields(
            3,
            vec![field("Priority", "High"), field("Periodsplanering", "P1 2024")],
        ),
    ];
    let sort = BacklogSort {
        priority: Some(SortOrder::Reverse),
        period: Some(SortOrder::Forward),
        ..Default::default()
    };

    sort.sort(&mut stories);

    assert_eq!(ids(&stories), vec![3, 2, 1]);
}

#[test]
fn test_name_breaks_priority_ties() {
    let mut stories = vec![
        story(1, "b"),
        story(2, "a"),
        story(3, "c"),
    ];
    stories[2].custom_fields = vec![field("Priority", "High")];
    let sort = BacklogSort {
        priority: Some(SortOrder::Reverse),
        name: Some(SortOrder::Forward),
        ..Default::default()
    };

    sort.sort(&mut stories);

    assert_eq!(ids(&stories), vec![3, 2, 1]);
}

#[test]
fn test_updated_reverse() {
    let mut stories = vec![story(1, "a"), story(2, "b"), story(3, "c")];
    stories[0].updated = at(5);
    stories[1].updated = at(9);
    stories[2].updated = at(2);
    let sort = BacklogSort {
        updated: Some(SortOrder::Reverse),
        ..Default::default()
    };

    sort.sort(&mut stories);

    assert_eq!(ids(&stories), vec![2, 1, 3]);
}

#[test]
fn test_id_reverse() {
    let mut stories = vec![story(1, "a"), story(3, "c"), story(2, "b")];
    let sort = BacklogSort {
        id: Some(SortOrder::Reverse),
        ..Default::default()
    };

    sort.sort(&mut stories);

    assert_eq!(ids(&stories), vec![3, 2, 1]);
}
