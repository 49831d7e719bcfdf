use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid story association: {value} {location}")]
    InvalidReferenceKind {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
