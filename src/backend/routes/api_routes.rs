/**
 * Protected Route Handlers
 *
 * Every route here requires a valid session. The auth middleware is added
 * with `route_layer`, so it only runs for requests that matched one of these
 * routes; unknown paths still fall through to the 404 fallback.
 *
 * # Routes
 *
 * ## Users
 * - `GET /users/me` - Current user
 * - `PATCH /users/me` - Update name and email
 *
 * ## Movies
 * - `GET /movies` - All saved movies
 * - `POST /movies` - Save a movie
 * - `DELETE /movies/{movie_id}` - Delete one of the caller's movies
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get},
    Router,
};

use crate::backend::auth::{get_me, update_me};
use crate::backend::middleware::auth_middleware;
use crate::backend::movies::{add_movie, get_movies, remove_movie};
use crate::backend::server::state::AppState;

/// Build the protected routes, wrapped in the auth middleware
pub fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users/me", get(get_me).patch(update_me))
        .route("/movies", get(get_movies).post(add_movie))
        .route("/movies/{movie_id}", delete(remove_movie))
        .route_layer(from_fn_with_state(state, auth_middleware))
}
