/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers and middleware can
 * return it directly. This is also the terminal handler for anything the
 * handlers did not translate: internal failures are logged here and replaced
 * by the generic message.
 *
 * # Response Format
 *
 * ```json
 * { "message": "Error message" }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;
use crate::shared::messages;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!(error = %self, "Unhandled internal error");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = serde_json::json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}

/// Fallback for unmatched routes
pub async fn not_found_fallback() -> BackendError {
    BackendError::not_found(messages::PAGE_NOT_FOUND)
}

/// Turn a handler panic caught by `CatchPanicLayer` into the generic 500 body
pub fn handle_panic(_panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("Handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "message": messages::SERVER_ERROR })),
    )
        .into_response()
}
