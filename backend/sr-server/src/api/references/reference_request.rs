use crate::ApiError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Body of POST and PUT on a reference collection
#[derive(Debug, Deserialize)]
pub struct ReferenceRequest {
    pub name: String,
}

impl ReferenceRequest {
    /// The trimmed name, which must not be empty
    #[track_caller]
    pub fn validated_name(&self) -> Result<&str, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation {
                message: "Name must not be empty".to_string(),
                field: Some("name".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(name)
    }
}
