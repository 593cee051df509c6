use std::time::Duration;

use thiserror::Error;

use crate::domain::object_id::ObjectIdError;

/// Top-level error for all user lookups
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] ObjectIdError),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("User not found with email: {0}")]
    NotFoundByEmail(String),

    #[error("User lookup timed out after {0:?}")]
    LookupTimeout(Duration),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
