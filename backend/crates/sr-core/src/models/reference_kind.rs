use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The locally owned entity types that can be attached to a story.
///
/// All four share the same shape (auto id + unique name) and differ only in
/// their table and link table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Person,
    Component,
    EpicGroup,
    Product,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 4] = [
        ReferenceKind::Person,
        ReferenceKind::Component,
        ReferenceKind::EpicGroup,
        ReferenceKind::Product,
    ];

    /// Human name used in error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Component => "Component",
            Self::EpicGroup => "Epic group",
            Self::Product => "Product",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            Self::Person => "persons",
            Self::Component => "components",
            Self::EpicGroup => "epic_groups",
            Self::Product => "products",
        }
    }

    /// Link table between stories and this entity
    pub fn association_table(&self) -> &'static str {
        match self {
            Self::Person => "story_persons",
            Self::Component => "story_components",
            Self::EpicGroup => "story_epic_groups",
            Self::Product => "story_products",
        }
    }

    /// Foreign key column in the link table
    pub fn association_column(&self) -> &'static str {
        match self {
            Self::Person => "person_id",
            Self::Component => "component_id",
            Self::EpicGroup => "epic_group_id",
            Self::Product => "product_id",
        }
    }

    /// Top-level REST collection path
    pub fn route_prefix(&self) -> &'static str {
        match self {
            Self::Person => "/persons",
            Self::Component => "/components",
            Self::EpicGroup => "/epic-groups",
            Self::Product => "/products",
        }
    }
}

impl FromStr for ReferenceKind {
    type Err = CoreError;

    /// Parse the association segment of `/stories/{id}/{association}/{assoc_id}`.
    /// Singular and plural spellings are both accepted.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "person" | "persons" => Ok(Self::Person),
            "component" | "components" => Ok(Self::Component),
            "epic-group" | "epic-groups" => Ok(Self::EpicGroup),
            "product" | "products" => Ok(Self::Product),
            _ => Err(CoreError::InvalidReferenceKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
