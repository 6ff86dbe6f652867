//! Implements RFC 3490, Internationalized Domain Names in Applications,
//! encoding for names given to `DigTable` queries.

use std::borrow::Cow::{self, Borrowed, Owned};

use crate::error::{Error, Result};

/// Converts a label or host to its ASCII format. If the string is already ASCII,
/// it is borrowed unmodified, case included. Names that cannot be encoded
/// yield `Error::InvalidName`.
pub fn to_ascii(s: &str) -> Result<Cow<str>> {
    if s.is_ascii() {
        return Ok(Borrowed(s));
    }

    match ::idna::domain_to_ascii(s) {
        Ok(ascii) => Ok(Owned(ascii)),
        Err(_) => Err(Error::InvalidName{domain: s.to_owned()}),
    }
}
