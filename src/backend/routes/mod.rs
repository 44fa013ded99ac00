//! Route Configuration Module
//!
//! HTTP routes for the backend server, split by whether they need a
//! session.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! ├── auth_routes.rs  - Public session routes
//! └── api_routes.rs   - Protected user and movie routes
//! ```
//!
//! | Method & Path | Session |
//! |---|---|
//! | POST /signin | no |
//! | POST /signup | no |
//! | GET /signout | no |
//! | GET, PATCH /users/me | yes |
//! | GET, POST /movies | yes |
//! | DELETE /movies/{movie_id} | yes |

/// Main router creation
pub mod router;

/// Public session routes
pub mod auth_routes;

/// Protected routes
pub mod api_routes;

pub use router::create_router;
