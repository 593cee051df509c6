use thiserror::Error;

use crate::domain::object_id::ObjectIdError;

/// Errors raised by the login flow and the token verification strategy.
///
/// `AuthenticationFailed` deliberately covers both an unknown email and a wrong
/// password.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username or password not set on request")]
    MissingCredential,

    #[error("User not found matching email/password combination")]
    AuthenticationFailed,

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] ObjectIdError),

    #[error("No userId in JWT")]
    MalformedToken,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("No user for token")]
    UnknownUser,

    #[error("User lookup failed: {0}")]
    LookupFailure(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<auth::JwtError> for AuthError {
    fn from(err: auth::JwtError) -> Self {
        AuthError::InvalidToken(err.to_string())
    }
}
