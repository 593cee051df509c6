use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::object_id::ObjectId;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// Login and token verification on top of the user service.
pub struct AuthService<US>
where
    US: UserServicePort,
{
    user_service: Arc<US>,
    authenticator: Arc<Authenticator>,
    token_expiration_hours: Option<i64>,
}

impl<US> AuthService<US>
where
    US: UserServicePort,
{
    /// Create a new auth service.
    ///
    /// # Arguments
    /// * `user_service` - User lookups
    /// * `authenticator` - Password verification and token signing
    /// * `token_expiration_hours` - Lifetime of issued tokens; `None` issues
    ///   tokens without `exp`
    pub fn new(
        user_service: Arc<US>,
        authenticator: Arc<Authenticator>,
        token_expiration_hours: Option<i64>,
    ) -> Self {
        Self {
            user_service,
            authenticator,
            token_expiration_hours,
        }
    }
}

#[async_trait]
impl<US> AuthServicePort for AuthService<US>
where
    US: UserServicePort,
{
    async fn login(&self, credentials: Credentials) -> Result<String, AuthError> {
        let user = match self
            .user_service
            .get_user_by_email(credentials.email())
            .await
        {
            Ok(user) => user,
            Err(UserError::NotFoundByEmail(_)) => {
                tracing::warn!(reason = "unknown_email", "Login rejected");
                return Err(AuthError::AuthenticationFailed);
            }
            Err(e) => return Err(AuthError::LookupFailure(e.to_string())),
        };

        let claims = Claims::for_user(user.id, self.token_expiration_hours);
        let authenticator = Arc::clone(&self.authenticator);
        let password = credentials.into_password();
        let password_hash = user.password_hash.clone();

        // Hash comparison is CPU bound
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &password_hash, &claims)
        })
        .await
        .map_err(|e| AuthError::Internal(e.to_string()))?;

        match result {
            Ok(token) => {
                tracing::info!(user_id = %user.id, "User logged in");
                Ok(token)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!(user_id = %user.id, reason = "password_mismatch", "Login rejected");
                Err(AuthError::AuthenticationFailed)
            }
            Err(e) => {
                tracing::error!(user_id = %user.id, error = %e, "Login failed");
                Err(AuthError::Internal(e.to_string()))
            }
        }
    }

    async fn verify_token(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.authenticator.verify_token(token)?;

        let user_id = claims.user_id.ok_or(AuthError::MalformedToken)?;
        let user_id = ObjectId::parse_str(&user_id)?;

        self.user_service
            .get_user(&user_id)
            .await
            .map_err(|e| match e {
                UserError::NotFound(_) => AuthError::UnknownUser,
                _ => AuthError::LookupFailure(e.to_string()),
            })
    }
}
