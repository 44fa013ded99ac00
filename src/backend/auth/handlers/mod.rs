//! Authentication Handlers Module
//!
//! HTTP handlers for the session and profile endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - Sign-in and sign-out handlers
//! └── me.rs       - Current user read/update handlers
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration
//! - **`login`** - POST /signin - Credential check, sets session cookie
//! - **`logout`** - GET /signout - Clears session cookie
//! - **`get_me`** - GET /users/me - Current user
//! - **`update_me`** - PATCH /users/me - Update name and email

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login and logout handlers
pub mod login;

/// Current user handlers
pub mod me;

pub use types::{LoginRequest, LoginResponse, MessageResponse, SignupRequest, UpdateProfileRequest};

pub use login::{login, logout};
pub use me::{get_me, update_me};
pub use signup::signup;
