use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credentials;
use crate::domain::user::models::User;

/// Port for the authentication gateway.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Check credentials and issue a signed token.
    ///
    /// # Arguments
    /// * `credentials` - Email and plaintext password
    ///
    /// # Returns
    /// Compact JWT carrying the user's id as `userId`
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Unknown email or wrong password
    /// * `LookupFailure` - User store failed
    /// * `Internal` - Hashing or signing failed
    async fn login(&self, credentials: Credentials) -> Result<String, AuthError>;

    /// Resolve the user a bearer token was issued for.
    ///
    /// # Arguments
    /// * `token` - Compact JWT taken from the `Authorization` header
    ///
    /// # Returns
    /// The authenticated user
    ///
    /// # Errors
    /// * `InvalidToken` - Signature, format or expiry check failed
    /// * `MalformedToken` - Token has no `userId` claim
    /// * `InvalidIdentifier` - `userId` is not an object id
    /// * `UnknownUser` - No user with that id
    /// * `LookupFailure` - User store failed
    async fn verify_token(&self, token: &str) -> Result<User, AuthError>;
}
