//! Server Module
//!
//! Server setup: state, database and app creation.
//!
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`config`** - Database pool and migrations
//! - **`init`** - App creation from `AppConfig`
//!
//! # Example
//!
//! ```rust,no_run
//! use bitfilms::backend::server::create_app;
//! use bitfilms::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state
pub mod state;

/// Database setup
pub mod config;

/// App creation
pub mod init;

pub use init::{build_app, create_app};
pub use state::AppState;
