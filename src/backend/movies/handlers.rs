/**
 * Movie Handlers
 *
 * `GET /movies`, `POST /movies` and `DELETE /movies/{movie_id}`. All three
 * run behind the auth middleware.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::error::{is_foreign_key_violation, BackendError};
use crate::backend::extract::ValidatedJson;
use crate::backend::middleware::AuthUser;
use crate::backend::movies::db::{create_movie, delete_owned_movie, get_movie_by_id, list_movies};
use crate::backend::movies::models::Movie;
use crate::backend::movies::ownership::check_owner;
use crate::backend::movies::types::CreateMovieRequest;
use crate::shared::messages;
use crate::shared::ObjectId;

/// List all saved movies
pub async fn get_movies(
    State(pool): State<SqlitePool>,
    AuthUser(_auth): AuthUser,
) -> Result<Json<Vec<Movie>>, BackendError> {
    let movies = list_movies(&pool).await?;
    Ok(Json(movies))
}

/// Save a movie for the caller
///
/// # Errors
///
/// * `400 Bad Request` - Missing or invalid fields
/// * `404 Not Found` - The caller's user record no longer exists
pub async fn add_movie(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMovieRequest>,
) -> Result<Json<Movie>, BackendError> {
    let movie = create_movie(&pool, &request, &auth.user_id)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                tracing::warn!("Movie insert for vanished user: {}", auth.user_id);
                BackendError::not_found(messages::USER_NOT_FOUND)
            } else {
                e.into()
            }
        })?;

    tracing::info!("Movie {} saved by {}", movie.id, movie.owner);

    Ok(Json(movie))
}

/// Delete one of the caller's movies
///
/// # Errors
///
/// * `400 Bad Request` - `movie_id` is not a 24-character hex id
/// * `403 Forbidden` - The movie belongs to another user
/// * `404 Not Found` - No such movie, including one deleted concurrently
pub async fn remove_movie(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
    Path(movie_id): Path<String>,
) -> Result<Json<Movie>, BackendError> {
    let movie_id = ObjectId::parse(&movie_id)
        .map_err(|_| BackendError::bad_request(messages::MOVIE_DELETE_INVALID))?;

    let movie = check_owner(get_movie_by_id(&pool, &movie_id).await?, &auth.user_id)?;

    let deleted = delete_owned_movie(&pool, &movie.id, &auth.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(messages::MOVIE_NOT_FOUND))?;

    tracing::info!("Movie {} deleted by {}", deleted.id, auth.user_id);

    Ok(Json(deleted))
}
