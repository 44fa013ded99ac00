//! Authentication Module
//!
//! User registration, credential checks, session tokens and profile access.
//!
//! # Architecture
//!
//! - **`users`** - Credential store (user records and queries)
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - Session token issuing and verification (JWT)
//! - **`cookies`** - Session cookie construction
//! - **`handlers`** - HTTP handlers for the auth and profile endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name, email, password → password hashed → user stored → user returned
//! 2. **Signin**: email, password → hash verified → token issued → `jwt` cookie set
//! 3. **Requests**: `jwt` cookie → token verified by the auth middleware → identity attached
//! 4. **Signout**: `jwt` cookie overwritten with an expired, empty one
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10 by default)
//! - Tokens are stateless and expire after 7 days
//! - Invalid credentials return 401 with one message for every cause

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// Session token generation and validation
pub mod sessions;

/// Session cookie construction
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use cookies::{CookieSettings, SESSION_COOKIE};
pub use handlers::{get_me, login, logout, signup, update_me};
pub use password::PasswordHasher;
pub use sessions::{InvalidTokenError, SessionKeys};
pub use users::User;
