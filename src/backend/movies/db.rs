/**
 * Movie Database Operations
 *
 * Movie persistence. `owner` is a foreign key into `users`, so inserting a
 * movie for a user that does not exist fails with a foreign-key violation.
 */

use sqlx::SqlitePool;

use crate::backend::movies::models::Movie;
use crate::backend::movies::types::CreateMovieRequest;
use crate::shared::ObjectId;

const MOVIE_COLUMNS: &str = "id, country, director, duration, year, description, image, \
     trailer_link, thumbnail, name_ru, name_en, movie_id, owner";

/// Insert a movie owned by `owner`
pub async fn create_movie(
    pool: &SqlitePool,
    movie: &CreateMovieRequest,
    owner: &ObjectId,
) -> Result<Movie, sqlx::Error> {
    let id = ObjectId::generate();

    let query = format!(
        r#"
        INSERT INTO movies (
            id, country, director, duration, year, description, image,
            trailer_link, thumbnail, name_ru, name_en, movie_id, owner
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING {MOVIE_COLUMNS}
        "#
    );

    let movie = sqlx::query_as::<_, Movie>(&query)
        .bind(&id)
        .bind(&movie.country)
        .bind(&movie.director)
        .bind(movie.duration)
        .bind(&movie.year)
        .bind(&movie.description)
        .bind(&movie.image)
        .bind(&movie.trailer_link)
        .bind(&movie.thumbnail)
        .bind(&movie.name_ru)
        .bind(&movie.name_en)
        .bind(movie.movie_id)
        .bind(owner)
        .fetch_one(pool)
        .await?;

    Ok(movie)
}

/// All movies in insertion order
pub async fn list_movies(pool: &SqlitePool) -> Result<Vec<Movie>, sqlx::Error> {
    let query = format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY rowid");

    sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
}

/// Get movie by ID
pub async fn get_movie_by_id(pool: &SqlitePool, id: &ObjectId) -> Result<Option<Movie>, sqlx::Error> {
    let query = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = ?");

    sqlx::query_as::<_, Movie>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Delete a movie if it is still owned by `owner`
///
/// # Returns
/// The deleted row, or `None` if no matching row remained (already deleted
/// by a concurrent request)
pub async fn delete_owned_movie(
    pool: &SqlitePool,
    id: &ObjectId,
    owner: &ObjectId,
) -> Result<Option<Movie>, sqlx::Error> {
    let query = format!("DELETE FROM movies WHERE id = ? AND owner = ? RETURNING {MOVIE_COLUMNS}");

    sqlx::query_as::<_, Movie>(&query)
        .bind(id)
        .bind(owner)
        .fetch_optional(pool)
        .await
}
