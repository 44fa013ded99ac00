//! Movies Module
//!
//! The saved-movies catalog: every signed-in user can list all movies and
//! save new ones; only the owner can delete a movie.
//!
//! # Module Structure
//!
//! ```text
//! movies/
//! ├── mod.rs        - Module exports
//! ├── models.rs     - Movie record
//! ├── types.rs      - Create request and its validation
//! ├── db.rs         - Database operations
//! ├── ownership.rs  - Owner check for mutations
//! └── handlers.rs   - HTTP handlers
//! ```

pub mod db;
pub mod handlers;
pub mod models;
pub mod ownership;
pub mod types;

pub use handlers::{add_movie, get_movies, remove_movie};
pub use models::Movie;
pub use ownership::{check_owner, Owned};
pub use types::CreateMovieRequest;
