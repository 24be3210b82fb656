//! Error types for OpenProfile

use crate::model::FieldId;
use thiserror::Error;

/// OpenProfile error type
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Field definition not found
    #[error("field definition not found: {0}")]
    DefinitionNotFound(FieldId),

    /// Storage-layer failure
    #[error("data access error: {0}")]
    DataAccess(String),
}

/// Result type for OpenProfile
pub type ProfileResult<T> = Result<T, ProfileError>;
