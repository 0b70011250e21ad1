//! Precondition checks for caller supplied names.
//!
//! Every check fails fast with [`MetadataError::InvalidArgument`] carrying the
//! caller's message, so a rejected call never reaches the mutation code.

use crate::error::{MetadataError, Result};

/// Returns `value` unless it is empty.
pub fn ensure_parameter<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(MetadataError::InvalidArgument(message.to_owned()));
    }
    Ok(value)
}

/// Returns the contained name unless it is missing or empty.
pub fn ensure_present<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str> {
    match value {
        Some(value) => ensure_parameter(value, message),
        None => Err(MetadataError::InvalidArgument(message.to_owned())),
    }
}
