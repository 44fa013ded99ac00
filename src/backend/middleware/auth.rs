/**
 * Authentication Middleware
 *
 * Protects every route that needs a signed-in user. The session token is
 * read from the `jwt` cookie, falling back to an `Authorization: Bearer`
 * header for non-browser clients.
 *
 * | Request | Outcome |
 * |---|---|
 * | no token | 401 |
 * | token present but invalid or expired | 401 |
 * | valid token | `AuthenticatedUser` attached, request continues |
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::backend::auth::cookies::SESSION_COOKIE;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::BackendError;
use crate::shared::messages;
use crate::shared::ObjectId;

/// Identity of the caller, set by `auth_middleware`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: ObjectId,
}

/// Find the session token on a request
///
/// A non-empty cookie wins over the header.
pub fn extract_token(jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
}

/// Authentication middleware
///
/// 1. Extracts the session token
/// 2. Verifies signature and expiry
/// 3. Attaches `AuthenticatedUser` to request extensions
pub async fn auth_middleware(
    State(keys): State<SessionKeys>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = extract_token(&jar, request.headers()).ok_or_else(|| {
        tracing::debug!("Missing session token");
        BackendError::authorization(messages::AUTH_REQUIRED)
    })?;

    let user_id = keys.verify(&token).map_err(|e| {
        tracing::warn!("Rejected session token: {}", e);
        BackendError::authorization(messages::AUTH_REQUIRED)
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Rejects with 401 when the route was not wrapped by `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::authorization(messages::AUTH_REQUIRED)
            })?;

        Ok(AuthUser(user))
    }
}
