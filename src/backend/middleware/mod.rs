//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Session token verification for protected routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use bitfilms::backend::middleware::auth_middleware;
//!
//! let protected = protected_routes.route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, extract_token, AuthUser, AuthenticatedUser};
