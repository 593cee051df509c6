use std::fmt;

use crate::domain::auth::errors::AuthError;

/// Login credentials as received on the wire.
///
/// The plaintext password lives only as long as the login request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Build credentials from possibly absent request fields.
    ///
    /// # Errors
    /// * `MissingCredential` - Either field is absent or empty
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, AuthError> {
        match (email, password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Ok(Self { email, password })
            }
            _ => Err(AuthError::MissingCredential),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn into_password(self) -> String {
        self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
