//! Validated message body text.

use super::MessageValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty message body.
///
/// The text is stored exactly as supplied; only the emptiness check trims.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageText(String);

impl MessageText {
    /// Creates validated message text.
    ///
    /// # Errors
    ///
    /// Returns [`MessageValidationError::EmptyText`] when the value is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, MessageValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(MessageValidationError::EmptyText);
        }
        Ok(Self(raw))
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length in characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl TryFrom<String> for MessageText {
    type Error = MessageValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MessageText> for String {
    fn from(value: MessageText) -> Self {
        value.0
    }
}

impl AsRef<str> for MessageText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
