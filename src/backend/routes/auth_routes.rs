/**
 * Public Route Handlers
 *
 * Session endpoints that work without a session.
 *
 * # Routes
 *
 * - `POST /signin` - Check credentials, set the session cookie
 * - `POST /signup` - User registration
 * - `GET /signout` - Clear the session cookie
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, logout, signup};
use crate::backend::server::state::AppState;

/// Configure public authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/signin", post(login))
        .route("/signup", post(signup))
        .route("/signout", get(logout))
}
