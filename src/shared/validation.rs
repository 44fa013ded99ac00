//! Input validation
//!
//! Format checks shared by every request type, plus the `Validate` trait the
//! `ValidatedJson` extractor relies on.

use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::error::SharedError;
use crate::shared::messages;

lazy_static! {
    /// Pragmatic email check: local part, `@`, dotted domain with a TLD
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,}$"
    ).unwrap();

    /// HTTP/HTTPS URL with a host (domain, localhost or IPv4), optional port and path
    static ref URL_REGEX: Regex = Regex::new(
        r"^https?://(?:www\.)?(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}|localhost|\d{1,3}(?:\.\d{1,3}){3})(?::\d{1,5})?(?:[/?#][^\s]*)?$"
    ).unwrap();

    /// 24 hex digits
    static ref HEX_ID_REGEX: Regex = Regex::new(r"^[0-9a-fA-F]{24}$").unwrap();
}

/// Request bodies that can check their own contents
pub trait Validate {
    fn validate(&self) -> Result<(), SharedError>;
}

pub fn is_email(value: &str) -> bool {
    value.len() <= 254 && EMAIL_REGEX.is_match(value)
}

pub fn is_url(value: &str) -> bool {
    value.len() <= 2048 && URL_REGEX.is_match(value)
}

pub fn is_hex_id(value: &str) -> bool {
    HEX_ID_REGEX.is_match(value)
}

/// Field must be present and not blank
pub fn require_non_empty(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, messages::EMPTY_FIELD));
    }
    Ok(())
}

/// Field must be a valid email address
pub fn require_email(field: &str, value: &str) -> Result<(), SharedError> {
    require_non_empty(field, value)?;
    if !is_email(value) {
        return Err(SharedError::validation(field, messages::INVALID_EMAIL));
    }
    Ok(())
}

/// Field must be an http(s) URL
pub fn require_url(field: &str, value: &str) -> Result<(), SharedError> {
    require_non_empty(field, value)?;
    if !is_url(value) {
        return Err(SharedError::validation(field, messages::INVALID_URL));
    }
    Ok(())
}

/// Display name: 2-30 characters (counted as chars, not bytes)
pub fn require_name(field: &str, value: &str) -> Result<(), SharedError> {
    let length = value.chars().count();
    if !(2..=30).contains(&length) {
        return Err(SharedError::validation(field, messages::INVALID_NAME));
    }
    Ok(())
}
