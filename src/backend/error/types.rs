/**
 * Backend Error Types
 *
 * This module defines the single error type returned by every HTTP handler
 * and middleware in the backend.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * Carry a localized message that is safe to show to the SPA:
 * - `BadRequest` (400) - malformed or invalid input
 * - `Authorization` (401) - missing/invalid credentials or token
 * - `Forbidden` (403) - authenticated but not permitted
 * - `NotFound` (404) - resource or route absent
 * - `Conflict` (409) - uniqueness violation
 *
 * ## Internal errors
 *
 * Wrap library failures (database, bcrypt, JWT encoding, blocking task
 * join). They all map to 500 and the client only sees the generic message.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::messages;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use bitfilms::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::forbidden("not yours");
/// assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed or invalid input
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Missing or invalid credentials or session token
    #[error("Authorization error: {message}")]
    Authorization { message: String },

    /// Caller is authenticated but may not act on the resource
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Resource or route does not exist
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Storage rejected a duplicate of a unique field
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Validation or identifier error from the shared module
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// bcrypt failure (hashing, or an unparseable stored hash)
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// JWT encoding failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// A blocking task panicked or was cancelled
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl BackendError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        Self::Authorization {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Authorization { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(_)
            | Self::PasswordHash(_)
            | Self::Token(_)
            | Self::TaskJoin(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error hides an internal failure
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Get the message shown to the client
    ///
    /// Internal errors always yield the generic server error text.
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest { message }
            | Self::Authorization { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Conflict { message } => message.clone(),
            Self::SharedError(err) => err.client_message(),
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) | Self::TaskJoin(_) => {
                messages::SERVER_ERROR.to_string()
            }
        }
    }
}

/// Whether a database error is a unique-constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Whether a database error is a foreign-key violation
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
