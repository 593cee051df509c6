use std::collections::HashMap;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token payload issued on login.
///
/// The only claim the gateway relies on is `userId`. It is optional on the
/// decoding side so that a correctly signed token without it can be reported
/// as malformed instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Claims {
    /// Identifier of the authenticated user
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Any other fields found in the token
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for an authenticated user.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `expiration_hours` - Hours until the token expires; `None` issues a
    ///   token without `exp`
    ///
    /// # Returns
    /// Claims with `userId` and `iat` set, and `exp` when requested
    pub fn for_user(user_id: impl ToString, expiration_hours: Option<i64>) -> Self {
        let now = Utc::now();

        Self {
            user_id: Some(user_id.to_string()),
            iat: Some(now.timestamp()),
            exp: expiration_hours.map(|hours| (now + Duration::hours(hours)).timestamp()),
            extra: HashMap::new(),
        }
    }

    /// Set user identifier.
    pub fn with_user_id(mut self, user_id: impl ToString) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Add a custom field.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key.to_string(), json_value);
        }
        self
    }
}
