//! Record identifiers
//!
//! Users and movies are keyed by 12-byte identifiers rendered as 24 lowercase
//! hex characters: a 4-byte big-endian Unix timestamp followed by 8 random
//! bytes. The SPA treats them as opaque strings; the API only checks the shape.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::is_hex_id;

/// Opaque 24-hex-character record identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        let seconds = Utc::now().timestamp() as u32;
        let random = uuid::Uuid::new_v4();

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..].copy_from_slice(&random.as_bytes()[..8]);

        Self(bytes.iter().map(|b| format!("{:02x}", b)).collect())
    }

    /// Parse an identifier supplied by a client
    ///
    /// Accepts exactly 24 hex digits in either case and normalizes to lowercase.
    pub fn parse(value: &str) -> Result<Self, SharedError> {
        if !is_hex_id(value) {
            return Err(SharedError::invalid_id(value));
        }
        Ok(Self(value.to_ascii_lowercase()))
    }

    /// Borrow the hex representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ObjectId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
