//! Validated identifier newtype.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::error::{NormalizeError, Result};
use crate::options::MAX_LENGTH;
use crate::reserved::is_reserved;
use crate::sanitize::has_identifier_shape;

/// A storage-safe identifier.
///
/// Always matches `[a-z_][a-z0-9_]*`, is 1 to 63 characters long and is not
/// a reserved word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Validate an existing name as an identifier with the default length
    /// limit.
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_identifier(&name, MAX_LENGTH)?;
        Ok(Self(name))
    }

    /// Wrap a name produced by the normalization pipeline.
    pub(crate) fn from_normalized(name: String, max_length: usize) -> Self {
        debug_assert!(has_identifier_shape(&name) && !is_reserved(&name));
        debug_assert!(name.chars().count() <= max_length);
        Self(name)
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Returns true if `name` already satisfies every identifier invariant.
pub fn is_valid_identifier(name: &str) -> bool {
    check_identifier(name, MAX_LENGTH).is_ok()
}

/// Check `name` against the shape, length and reserved-word rules.
pub fn check_identifier(name: &str, max_length: usize) -> Result<()> {
    if name.is_empty() {
        return Err(NormalizeError::invalid_identifier(name, "must not be empty"));
    }
    if name.chars().count() > max_length {
        return Err(NormalizeError::invalid_identifier(
            name,
            "exceeds maximum length",
        ));
    }
    if !has_identifier_shape(name) {
        let reason = if name.starts_with(|c: char| c.is_ascii_digit()) {
            "must not start with a digit"
        } else {
            "must contain only lowercase letters, digits and underscores"
        };
        return Err(NormalizeError::invalid_identifier(name, reason));
    }
    if is_reserved(name) {
        return Err(NormalizeError::invalid_identifier(name, "is a reserved word"));
    }
    Ok(())
}
