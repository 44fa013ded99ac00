//! Backend Module
//!
//! The HTTP API: session handling, profile access and the movie catalog.
//!
//! - **`server`** - State, database setup, app creation
//! - **`routes`** - Router and layers
//! - **`auth`** - Users, passwords, session tokens and cookies
//! - **`middleware`** - Session check for protected routes
//! - **`movies`** - Movie catalog
//! - **`error`** - `BackendError` and its HTTP mapping
//! - **`extract`** - Validating JSON extractor

pub mod auth;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod movies;
pub mod routes;
pub mod server;
