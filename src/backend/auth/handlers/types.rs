/**
 * Authentication Handler Types
 *
 * Request and response bodies for the sign-in, sign-up, sign-out and
 * profile endpoints, with their validation rules.
 */

use serde::{Deserialize, Serialize};

use crate::shared::messages;
use crate::shared::validation::{require_email, require_name, require_non_empty};
use crate::shared::{ObjectId, SharedError, Validate};

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignupRequest {
    /// Display name (2-30 chars)
    pub name: String,
    /// Email address, must be unused
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
}

/// Name length is a record rule; failing it reports the record-level message
fn require_profile_name(name: &str, message: &str) -> Result<(), SharedError> {
    require_name("name", name).map_err(|_| SharedError::validation("name", message))
}

impl Validate for SignupRequest {
    fn validate(&self) -> Result<(), SharedError> {
        require_profile_name(&self.name, messages::USER_CREATE_INVALID)?;
        require_email("email", &self.email)?;
        require_non_empty("password", &self.password)
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), SharedError> {
        require_email("email", &self.email)?;
        require_non_empty("password", &self.password)
    }
}

/// Profile update request; both fields are required
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
}

impl Validate for UpdateProfileRequest {
    fn validate(&self) -> Result<(), SharedError> {
        require_email("email", &self.email)?;
        require_profile_name(&self.name, messages::USER_UPDATE_INVALID)
    }
}

/// Login response: only the user identifier, the token travels in the cookie
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(rename = "_id")]
    pub id: ObjectId,
}

/// Plain status message
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}
