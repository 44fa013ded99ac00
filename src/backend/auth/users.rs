/**
 * User Model and Database Operations
 *
 * The credential store. Normal reads return `User`, which has no password
 * field at all; only `get_credentials_by_email` reads the hash, for login.
 *
 * Email uniqueness is enforced by the `UNIQUE` constraint on `users.email`;
 * callers translate the violation into a conflict.
 */

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::shared::ObjectId;

/// User as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Display name (2-30 chars)
    pub name: String,
    /// User email address (unique)
    pub email: String,
}

/// User together with the stored password hash
///
/// Deliberately not `Serialize`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredentials {
    pub id: ObjectId,
    pub email: String,
    pub password_hash: String,
}

/// Create a new user
///
/// # Returns
/// Created user, or a database error (unique violation on duplicate email)
pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = ObjectId::generate();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, email
        "#,
    )
    .bind(&id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: &ObjectId) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by email, including the password hash
pub async fn get_credentials_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<UserCredentials>, sqlx::Error> {
    let credentials = sqlx::query_as::<_, UserCredentials>(
        r#"
        SELECT id, email, password_hash
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(credentials)
}

/// Update a user's name and email
///
/// # Returns
/// Updated user, `None` if the user no longer exists, or a database error
/// (unique violation if the email belongs to someone else)
pub async fn update_profile(
    pool: &SqlitePool,
    id: &ObjectId,
    name: &str,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET name = ?, email = ?
        WHERE id = ?
        RETURNING id, name, email
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
