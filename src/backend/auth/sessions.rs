/**
 * Session Tokens
 *
 * Issues and verifies the stateless session token (HS256 JWT) carried in the
 * session cookie.
 *
 * # Claims
 *
 * - `sub` - user identifier
 * - `iat` - issued at (Unix seconds)
 * - `exp` - expires at, seven days after `iat`
 *
 * A token is accepted while `now <= exp` and its signature matches the
 * configured secret. There is no leeway and no server-side revocation.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::ObjectId;

/// Session lifetime
pub const TOKEN_TTL_DAYS: i64 = 7;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Why a token was rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidTokenError {
    #[error("malformed token")]
    Malformed,
    #[error("token signature does not match")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
}

/// Signing and verification keys derived from the server secret
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys").finish_non_exhaustive()
    }
}

impl SessionKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Create a token for a user, issued now
    pub fn issue(&self, user_id: &ObjectId) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(user_id, Utc::now().timestamp())
    }

    /// Create a token for a user with an explicit issue time
    pub fn issue_at(
        &self,
        user_id: &ObjectId,
        issued_at: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at,
            exp: issued_at + Duration::days(TOKEN_TTL_DAYS).num_seconds(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify a token and return its subject
    pub fn verify(&self, token: &str) -> Result<ObjectId, InvalidTokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify a token against an explicit clock
    pub fn verify_at(&self, token: &str, now: i64) -> Result<ObjectId, InvalidTokenError> {
        let claims = self.decode_claims(token)?;
        if now > claims.exp {
            return Err(InvalidTokenError::Expired);
        }
        ObjectId::parse(&claims.sub).map_err(|_| InvalidTokenError::Malformed)
    }

    /// Check the signature and structure, leaving expiry to the caller
    fn decode_claims(&self, token: &str) -> Result<Claims, InvalidTokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => InvalidTokenError::InvalidSignature,
                ErrorKind::ExpiredSignature => InvalidTokenError::Expired,
                _ => InvalidTokenError::Malformed,
            })
    }
}
