use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const OBJECT_ID_BYTES: usize = 12;

/// Error for ObjectId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ObjectIdError {
    #[error("expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid hex string: {0}")]
    InvalidHex(String),
}

/// Opaque 12-byte document identifier.
///
/// The canonical text form is 24 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; OBJECT_ID_BYTES]);

impl ObjectId {
    pub const BYTES: usize = OBJECT_ID_BYTES;
    pub const HEX_LENGTH: usize = Self::BYTES * 2;

    pub fn from_bytes(bytes: [u8; Self::BYTES]) -> Self {
        Self(bytes)
    }

    /// Parse an identifier from its hex representation.
    ///
    /// Upper and lower case digits are both accepted.
    ///
    /// # Errors
    /// * `InvalidLength` - String is not exactly 24 characters long
    /// * `InvalidHex` - String contains non-hex characters
    pub fn parse_str(s: &str) -> Result<Self, ObjectIdError> {
        if s.len() != Self::HEX_LENGTH {
            return Err(ObjectIdError::InvalidLength {
                expected: Self::HEX_LENGTH,
                actual: s.len(),
            });
        }

        let mut bytes = [0u8; Self::BYTES];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| ObjectIdError::InvalidHex(e.to_string()))?;

        Ok(Self(bytes))
    }

    pub fn bytes(&self) -> [u8; Self::BYTES] {
        self.0
    }

    /// Canonical lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
