use sr_core::{CustomField, Label, Story, StoryCustomField, SyncSummary};
use sr_shortcut::RemoteStory;

use std::collections::HashMap;

use log::warn;

/// Turns fetched stories into local records, resolving label ids and custom
/// field value ids against what is stored locally.
///
/// A reference that cannot be resolved is dropped from the story (with a
/// warning and a count in the summary); the story itself is kept.
pub struct StoryBuilder {
    labels: HashMap<i64, Label>,
    values: HashMap<String, StoryCustomField>,
    summary: SyncSummary,
}

impl StoryBuilder {
    pub fn new(labels: &[Label], fields: &[CustomField]) -> Self {
        let labels = labels.iter().map(|l| (l.id, l.clone())).collect();

        let values = fields
            .iter()
            .flat_map(|field| {
                field.values.iter().map(move |v| {
                    (
                        v.value_id.clone(),
                        StoryCustomField {
                            value_id: v.value_id.clone(),
                            field_id: field.id.clone(),
                            field_name: field.name.clone(),
                            value: v.value.clone(),
                        },
                    )
                })
            })
            .collect();

        Self {
            labels,
            values,
            summary: SyncSummary::default(),
        }
    }

    /// Build an active story. Person, component, epic group and product links
    /// are left empty; syncing never writes them.
    pub fn build(&mut self, remote: &RemoteStory) -> Story {
        let mut labels: Vec<Label> = Vec::with_capacity(remote.labels.len());
        for remote_label in &remote.labels {
            match self.labels.get(&remote_label.id) {
                Some(label) if !labels.contains(label) => labels.push(label.clone()),
                Some(_) => {}
                None => {
                    warn!(
                        "Story {} references unknown label {} ({}); skipping the label",
                        remote.id, remote_label.id, remote_label.name
                    );
                    self.summary.skipped_labels += 1;
                }
            }
        }

        let mut custom_fields: Vec<StoryCustomField> =
            Vec::with_capacity(remote.custom_fields.len());
        for remote_field in &remote.custom_fields {
            match self.values.get(&remote_field.value_id) {
                Some(value) if !custom_fields.iter().any(|f| f.value_id == value.value_id) => {
                    custom_fields.push(value.clone())
                }
                Some(_) => {}
                None => {
                    warn!(
                        "Story {} references unknown custom field value {} (field {}); skipping the value",
                        remote.id, remote_field.value_id, remote_field.field_id
                    );
                    self.summary.skipped_custom_fields += 1;
                }
            }
        }

        self.summary.total += 1;

        Story {
            id: remote.id,
            name: remote.name.clone(),
            description: remote.description.clone().unwrap_or_default(),
            created: remote.created_at,
            updated: remote.updated_at,
            shortcut_url: remote.app_url.clone(),
            active: true,
            custom_fields,
            labels,
            persons: Vec::new(),
            components: Vec::new(),
            epic_groups: Vec::new(),
            products: Vec::new(),
        }
    }

    /// Counts for everything built so far
    pub fn into_summary(self) -> SyncSummary {
        self.summary
    }
}
