use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::object_id::ObjectId;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user lookups.
///
/// Every call to the repository is bounded by `lookup_timeout`; a store that
/// does not answer in time surfaces as `LookupTimeout` instead of stalling the
/// request.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    lookup_timeout: Duration,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `lookup_timeout` - Upper bound for a single repository call
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>, lookup_timeout: Duration) -> Self {
        Self {
            repository,
            lookup_timeout,
        }
    }

    async fn bounded<T>(
        &self,
        lookup: impl Future<Output = Result<T, UserError>>,
    ) -> Result<T, UserError> {
        tokio::time::timeout(self.lookup_timeout, lookup)
            .await
            .map_err(|_| {
                tracing::error!(
                    timeout_ms = self.lookup_timeout.as_millis() as u64,
                    "User store lookup timed out"
                );
                UserError::LookupTimeout(self.lookup_timeout)
            })?
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn get_user(&self, id: &ObjectId) -> Result<User, UserError> {
        self.bounded(self.repository.find_by_id(id))
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError> {
        self.bounded(self.repository.find_by_email(email))
            .await?
            .ok_or_else(|| UserError::NotFoundByEmail(email.to_string()))
    }
}
