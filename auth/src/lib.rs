//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the API gateway:
//! - Password hashing (Argon2id) and verification (Argon2id or bcrypt)
//! - JWT token generation and validation (HS256, shared secret)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Login Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let hash = auth.hash_password("password123").unwrap();
//!
//! let claims = Claims::for_user("507f1f77bcf86cd799439011", None);
//! let token = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! let decoded = auth.verify_token(&token).unwrap();
//! assert_eq!(decoded.user_id.as_deref(), Some("507f1f77bcf86cd799439011"));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
