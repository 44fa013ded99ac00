//! bitfilms - Movie Catalog API
//!
//! Backend for a saved-movies SPA: user registration, cookie-based
//! sessions, profile updates and a per-user movie catalog.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration, validation, identifiers, messages
//! - **`backend`** - Axum server, handlers, persistence
//!
//! # Usage
//!
//! ```rust,no_run
//! use bitfilms::backend::server::create_app;
//! use bitfilms::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod shared;
