/**
 * Signup Handler
 *
 * `POST /signup` registers a user.
 *
 * # Registration Process
 *
 * 1. Validate name, email and password (`ValidatedJson`)
 * 2. Hash password using bcrypt
 * 3. Insert the user
 * 4. Return the user without the password hash
 *
 * No session is started; the client signs in separately.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::SignupRequest;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::{create_user, User};
use crate::backend::error::{is_unique_violation, BackendError};
use crate::backend::extract::ValidatedJson;
use crate::shared::messages;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - If any field is missing or invalid
/// * `409 Conflict` - If the email is already registered (decided by the
///   database's unique constraint, so concurrent signups cannot both win)
/// * `500 Internal Server Error` - If hashing or the insert fails otherwise
///
/// # Example Response
///
/// ```json
/// { "_id": "65f0c0ffee0000000000abcd", "name": "Ann", "email": "a@x.com" }
/// ```
pub async fn signup(
    State(pool): State<SqlitePool>,
    State(hasher): State<PasswordHasher>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<Json<User>, BackendError> {
    tracing::info!("Signup request for email: {}", request.email);

    let password_hash = hasher.hash(&request.password).await?;

    let user = create_user(&pool, &request.name, &request.email, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Email already registered: {}", request.email);
                BackendError::conflict(messages::USER_EMAIL_TAKEN)
            } else {
                e.into()
            }
        })?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok(Json(user))
}
