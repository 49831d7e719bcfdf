use sr_core::Label;

use serde::Deserialize;

/// Label as returned by `/labels?slim=true` and embedded in stories
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteLabel {
    pub id: i64,
    pub name: String,
}

impl From<RemoteLabel> for Label {
    fn from(remote: RemoteLabel) -> Self {
        Label {
            id: remote.id,
            name: remote.name,
        }
    }
}
