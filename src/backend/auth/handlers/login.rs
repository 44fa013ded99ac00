/**
 * Login and Logout Handlers
 *
 * `POST /signin` checks credentials and starts a session by setting the
 * session cookie. `GET /signout` clears the cookie.
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 and message,
 *   and both pay for one bcrypt derivation
 * - Passwords are never logged or returned
 * - Signing out does not revoke the token; a copy stays usable until it
 *   expires
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::CookieJar;
use sqlx::SqlitePool;

use crate::backend::auth::cookies::CookieSettings;
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse, MessageResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::users::get_credentials_by_email;
use crate::backend::error::BackendError;
use crate::backend::extract::ValidatedJson;
use crate::shared::messages;

fn wrong_credentials() -> BackendError {
    BackendError::authorization(messages::WRONG_CREDENTIALS)
}

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body is malformed
/// * `401 Unauthorized` - If the email is unknown or the password is wrong
/// * `500 Internal Server Error` - If the lookup, hash check or token
///   creation fails
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Set-Cookie: jwt=eyJhbGciOiJIUzI1NiJ9...; HttpOnly; SameSite=None; Path=/; Max-Age=604800
///
/// { "_id": "65f0c0ffee0000000000abcd" }
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    State(hasher): State<PasswordHasher>,
    State(keys): State<SessionKeys>,
    State(cookies): State<CookieSettings>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), BackendError> {
    let Some(credentials) = get_credentials_by_email(&pool, &request.email).await? else {
        tracing::warn!("Login attempt for unknown email");
        hasher.verify_without_hash(&request.password).await?;
        return Err(wrong_credentials());
    };

    if !hasher.verify(&request.password, &credentials.password_hash).await? {
        tracing::warn!("Invalid password for user: {}", credentials.id);
        return Err(wrong_credentials());
    }

    let token = keys.issue(&credentials.id)?;

    tracing::info!("User logged in successfully: {}", credentials.id);

    Ok((
        jar.add(cookies.session(token)),
        Json(LoginResponse { id: credentials.id }),
    ))
}

/// Logout handler
///
/// Always succeeds, with or without a session.
pub async fn logout(
    State(cookies): State<CookieSettings>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    (
        jar.add(cookies.cleared()),
        Json(MessageResponse {
            message: messages::SIGNED_OUT.to_string(),
        }),
    )
}
