//! # Document Text
//!
//! [`DocumentText`] is the validated form of the text under audit. It is the
//! single place where input is checked, so every audit either starts from
//! well-formed text or fails with [`ValidationError::MalformedInput`] before
//! any heuristic runs.
//!
//! ## Validation
//!
//! - Bytes must be valid UTF-8.
//! - The text must not contain NUL characters (binary payloads such as PDF
//!   or DOCX containers pasted as text).
//!
//! Empty text is valid: it simply produces no flags and no value.

use std::io::Read;

use crate::digest::DocumentDigest;
use crate::error::{JurisError, ValidationError};

/// Validated, auditable document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText(String);

impl DocumentText {
    /// Validate an owned string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedInput`] if the text contains NUL
    /// characters.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if let Some(offset) = text.find('\0') {
            return Err(ValidationError::malformed(format!(
                "document contains a NUL character at byte {offset}; \
                 binary content cannot be audited"
            )));
        }
        Ok(Self(text))
    }

    /// Validate raw bytes as UTF-8 document text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedInput`] on invalid UTF-8 or
    /// embedded NUL characters.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ValidationError> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            ValidationError::malformed(format!(
                "document is not valid UTF-8 (first invalid byte at {})",
                e.valid_up_to()
            ))
        })?;
        Self::new(text)
    }

    /// Read a whole document from `reader` and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`JurisError::Io`] if reading fails and
    /// [`JurisError::Validation`] if the bytes are not auditable text.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, JurisError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes)?)
    }

    /// Access the text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// SHA-256 digest of the text, for audit trails.
    pub fn digest(&self) -> DocumentDigest {
        DocumentDigest::of(&self.0)
    }
}

impl AsRef<str> for DocumentText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
