/**
 * Current User Handlers
 *
 * `GET /users/me` and `PATCH /users/me`. Both run behind the auth
 * middleware and act on the identity it attached.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::UpdateProfileRequest;
use crate::backend::auth::users::{get_user_by_id, update_profile, User};
use crate::backend::error::{is_unique_violation, BackendError};
use crate::backend::extract::ValidatedJson;
use crate::backend::middleware::AuthUser;
use crate::shared::messages;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - No valid session
/// * `404 Not Found` - The token's user no longer exists
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
) -> Result<Json<User>, BackendError> {
    let user = get_user_by_id(&pool, &auth.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", auth.user_id);
            BackendError::not_found(messages::USER_NOT_FOUND)
        })?;

    Ok(Json(user))
}

/// Update current user handler
///
/// # Errors
///
/// * `400 Bad Request` - Name or email missing or invalid
/// * `401 Unauthorized` - No valid session
/// * `404 Not Found` - The token's user no longer exists
/// * `409 Conflict` - The email belongs to another user
pub async fn update_me(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<User>, BackendError> {
    let user = update_profile(&pool, &auth.user_id, &request.name, &request.email)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Email already taken: {}", request.email);
                BackendError::conflict(messages::USER_EMAIL_TAKEN)
            } else {
                e.into()
            }
        })?
        .ok_or_else(|| {
            tracing::warn!("User not found for update: {}", auth.user_id);
            BackendError::not_found(messages::USER_NOT_FOUND)
        })?;

    tracing::info!("Profile updated: {}", user.id);

    Ok(Json(user))
}
