//! Resource ownership guard
//!
//! Mutations on owned records go through `check_owner`: a missing record is
//! reported before a foreign one, so callers never learn whether someone
//! else's id exists unless it does.

use crate::backend::error::BackendError;
use crate::backend::movies::models::Movie;
use crate::shared::messages;
use crate::shared::ObjectId;

/// A record with a fixed owner
pub trait Owned {
    fn owner(&self) -> &ObjectId;
}

impl Owned for Movie {
    fn owner(&self) -> &ObjectId {
        &self.owner
    }
}

/// Return the record if `actor` owns it
///
/// * `None` → 404
/// * owned by someone else → 403
pub fn check_owner<R: Owned>(record: Option<R>, actor: &ObjectId) -> Result<R, BackendError> {
    let record = record.ok_or_else(|| BackendError::not_found(messages::MOVIE_NOT_FOUND))?;

    if record.owner() != actor {
        tracing::warn!("User {} attempted to modify a record owned by {}", actor, record.owner());
        return Err(BackendError::forbidden(messages::MOVIE_FORBIDDEN));
    }

    Ok(record)
}
