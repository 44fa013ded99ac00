//! Shared Error Types
//!
//! This module defines error types produced by the framework-independent
//! parts of the crate: request validation and identifier parsing.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field failed validation
//! - `InvalidId` - A string is not a well-formed record identifier
//!
//! # Usage
//!
//! ```rust
//! use bitfilms::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Некорректный email");
//! assert_eq!(error.client_message(), "Некорректный email");
//! ```
use thiserror::Error;

/// Errors that can occur outside of the HTTP layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable, localized error message
        message: String,
    },

    /// Malformed record identifier
    #[error("Invalid identifier: {value:?}")]
    InvalidId {
        /// The rejected input
        value: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid identifier error
    pub fn invalid_id(value: impl Into<String>) -> Self {
        Self::InvalidId {
            value: value.into(),
        }
    }

    /// Message safe to show to an API client
    ///
    /// Unlike `Display`, this omits the field name and the raw input.
    pub fn client_message(&self) -> String {
        match self {
            Self::ValidationError { message, .. } => message.clone(),
            Self::InvalidId { .. } => crate::shared::messages::MALFORMED_BODY.to_string(),
        }
    }
}
