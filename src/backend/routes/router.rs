/**
 * Router Configuration
 *
 * Combines the public and protected routes into the application router and
 * adds the cross-cutting layers.
 *
 * # Layers (outermost first)
 *
 * 1. Request tracing
 * 2. CORS for the configured SPA origins, with credentials
 * 3. Panic catcher returning the generic 500 body
 *
 * # Fallback
 *
 * Unmatched paths, and known paths hit with an unsupported method, return
 * 404 `{ "message": ... }` without requiring a session.
 */

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::{handle_panic, not_found_fallback};
use crate::backend::routes::api_routes::protected_routes;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::server::state::AppState;

/// Build the CORS layer for the configured origins
///
/// The `*` wildcard and origins that are not valid header values are
/// skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter(|origin| {
            if origin.as_str() == "*" {
                tracing::warn!("Ignoring wildcard CORS origin; credentials require explicit origins");
                return false;
            }
            true
        })
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_auth_routes(Router::new())
        .merge(protected_routes(app_state.clone()))
        .method_not_allowed_fallback(not_found_fallback)
        .fallback(not_found_fallback);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(&app_state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
