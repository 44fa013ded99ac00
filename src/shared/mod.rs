//! Shared Module
//!
//! Framework-independent building blocks used by the backend:
//!
//! - **`config`** - `AppConfig`, its builder and loading rules
//! - **`error`** - `SharedError` for validation and identifier parsing
//! - **`messages`** - Localized strings returned to API clients
//! - **`object_id`** - 24-hex record identifiers
//! - **`validation`** - Format checks and the `Validate` trait

pub mod config;
pub mod error;
pub mod messages;
pub mod object_id;
pub mod validation;

pub use config::{AppConfig, ConfigError, Environment};
pub use error::SharedError;
pub use object_id::ObjectId;
pub use validation::Validate;
