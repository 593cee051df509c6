use chrono::DateTime;
use chrono::Utc;

use crate::domain::object_id::ObjectId;

/// User record.
///
/// Owned by the user store; this service only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: ObjectId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
