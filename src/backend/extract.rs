//! Request extractors
//!
//! `ValidatedJson<T>` deserializes a JSON body and runs `T::validate`. Any
//! failure, from a missing content type to a too-short name, becomes a 400
//! with a localized message instead of axum's plain-text rejection.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::shared::messages;
use crate::shared::Validate;

/// JSON body that has passed validation
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            BackendError::bad_request(messages::MALFORMED_BODY)
        })?;

        value.validate()?;

        Ok(Self(value))
    }
}
