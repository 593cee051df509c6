use std::sync::Arc;

use async_graphql::Context;
use async_graphql::EmptyMutation;
use async_graphql::EmptySubscription;
use async_graphql::Object;
use async_graphql::Result;
use async_graphql::Schema;
use async_graphql::SimpleObject;
use serde_json::json;

use super::scalars::register_scalars;
use super::scalars::DateScalar;
use super::scalars::JsonScalar;
use super::scalars::ObjectIdScalar;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// GraphQL schema served on `/graphql`.
pub type ApiSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// User collaborator as seen from resolvers.
pub type Users = Arc<dyn UserServicePort>;

/// Build the schema with the custom scalars registered and the user service in
/// the schema data.
pub fn build_schema(users: Users) -> ApiSchema {
    register_scalars(Schema::build(QueryRoot, EmptyMutation, EmptySubscription))
        .data(users)
        .finish()
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: ObjectIdScalar,
    pub email: String,
    pub created_at: DateScalar,
    pub updated_at: DateScalar,
    /// The stored record as a document, without the password hash.
    pub raw: JsonScalar,
}

impl From<&User> for UserObject {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.clone(),
            created_at: user.created_at.into(),
            updated_at: user.updated_at.into(),
            raw: JsonScalar(json!({
                "_id": user.id.to_hex(),
                "email": user.email,
                "createdAt": user.created_at.timestamp_millis(),
                "updatedAt": user.updated_at.timestamp_millis(),
            })),
        }
    }
}

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The user the request was authenticated as.
    async fn me(&self, ctx: &Context<'_>) -> Result<UserObject> {
        let principal = ctx.data::<AuthenticatedUser>()?;
        Ok(UserObject::from(&principal.user))
    }

    /// Look up a user by id.
    async fn user(&self, ctx: &Context<'_>, id: ObjectIdScalar) -> Result<Option<UserObject>> {
        let users = ctx.data::<Users>()?;

        match users.get_user(&id.into()).await {
            Ok(user) => Ok(Some(UserObject::from(&user))),
            Err(UserError::NotFound(_)) => Ok(None),
            Err(e) => {
                tracing::error!(error = %e, "User lookup from GraphQL failed");
                Err(e.into())
            }
        }
    }
}
