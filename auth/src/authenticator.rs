use serde::Serialize;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Credential check and token issue/verification under one shared secret.
///
/// One instance signs tokens at login and verifies them on authenticated
/// requests, so both sides always agree on the key.
pub struct Authenticator {
    hasher: PasswordHasher,
    tokens: JwtHandler,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            hasher: PasswordHasher::new(),
            tokens: JwtHandler::new(jwt_secret),
        }
    }

    /// Hash a password for storage (Argon2id).
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.hasher.hash(password)
    }

    /// Compare a plaintext password with a stored Argon2 or bcrypt hash.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Hash is unreadable or of an unsupported scheme
    pub fn check_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<(), AuthenticationError> {
        if self.hasher.verify(password, stored_hash)? {
            Ok(())
        } else {
            Err(AuthenticationError::InvalidCredentials)
        }
    }

    /// Sign `claims` into a compact token.
    pub fn issue_token<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        self.tokens.encode(claims)
    }

    /// Check the password and, when it matches, sign `claims`.
    ///
    /// Password verification is CPU bound; async callers should run this on a
    /// blocking thread.
    pub fn authenticate<T: Serialize>(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &T,
    ) -> Result<String, AuthenticationError> {
        self.check_password(password, stored_hash)?;
        Ok(self.issue_token(claims)?)
    }

    /// Verify a token's signature (and `exp`, when present) and return its
    /// claims. Whether `userId` is set is left to the caller.
    pub fn verify_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.tokens.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";
    const USER_ID: &str = "507f1f77bcf86cd799439011";

    #[test]
    fn test_authenticate_issues_verifiable_token() {
        let authenticator = Authenticator::new(SECRET);
        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let token = authenticator
            .authenticate("my_password", &hash, &Claims::for_user(USER_ID, None))
            .expect("Authentication failed");

        let decoded = authenticator
            .verify_token(&token)
            .expect("Token validation failed");
        assert_eq!(decoded.user_id.as_deref(), Some(USER_ID));
    }

    #[test]
    fn test_wrong_password_is_invalid_credentials() {
        let authenticator = Authenticator::new(SECRET);
        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate(
            "wrong_password",
            &hash,
            &Claims::for_user(USER_ID, None),
        );
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_check_password_against_bcrypt_hash() {
        let authenticator = Authenticator::new(SECRET);
        let hash = bcrypt::hash("legacy", 4).expect("Failed to create bcrypt hash");

        assert!(authenticator.check_password("legacy", &hash).is_ok());
        assert!(matches!(
            authenticator.check_password("not_legacy", &hash),
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_check_password_unsupported_hash() {
        let authenticator = Authenticator::new(SECRET);

        assert!(matches!(
            authenticator.check_password("pw", "plaintext"),
            Err(AuthenticationError::PasswordError(PasswordError::UnsupportedHash))
        ));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let issuer = Authenticator::new(b"issuer_secret_key_at_least_32_bytes");
        let verifier = Authenticator::new(b"other_secret_key_at_least_32_bytes!");

        let token = issuer
            .issue_token(&Claims::for_user(USER_ID, None))
            .expect("Failed to issue token");

        assert!(matches!(
            verifier.verify_token(&token),
            Err(JwtError::InvalidSignature)
        ));
    }

    #[test]
    fn test_verify_garbage_token() {
        let authenticator = Authenticator::new(SECRET);

        assert!(authenticator.verify_token("invalid.token.here").is_err());
    }
}
