//! Backend Error Module
//!
//! This module defines the error type used by every handler and middleware.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and constraint helpers
//! └── conversion.rs - IntoResponse implementation and 404 fallback
//! ```
//!
//! # HTTP Response Conversion
//!
//! All backend errors implement `IntoResponse` from Axum. Client errors keep
//! their localized message; internal errors are logged and answered with the
//! generic server error message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use conversion::{handle_panic, not_found_fallback};
pub use types::{is_foreign_key_violation, is_unique_violation, BackendError};
