//! Limits applied by [`MessageData`](super::MessageData) before persisting.

use crate::message::domain::{MessageText, MessageValidationError};

/// Configuration for message input limits.
///
/// # Examples
///
/// ```
/// use parlour::message::services::MessageDataConfig;
///
/// let config = MessageDataConfig::default();
/// assert_eq!(config.max_tags, 100);
///
/// let strict = MessageDataConfig::strict();
/// assert!(strict.max_text_length < config.max_text_length);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDataConfig {
    /// Maximum message text length in characters.
    pub max_text_length: usize,
    /// Maximum number of tags on a message.
    pub max_tags: usize,
    /// Maximum length of a single tag in characters.
    pub max_tag_length: usize,
}

impl Default for MessageDataConfig {
    fn default() -> Self {
        Self {
            max_text_length: 100_000,
            max_tags: 100,
            max_tag_length: 256,
        }
    }
}

impl MessageDataConfig {
    /// Creates a strict configuration with reduced limits.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_text_length: 10_000,
            max_tags: 20,
            max_tag_length: 64,
        }
    }

    /// Creates a configuration that imposes no practical limits.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            max_text_length: usize::MAX,
            max_tags: usize::MAX,
            max_tag_length: usize::MAX,
        }
    }

    /// Checks the message body against the length limit.
    ///
    /// # Errors
    ///
    /// Returns [`MessageValidationError::TextTooLong`] when the text is over
    /// the limit.
    pub fn check_text(&self, text: &MessageText) -> Result<(), MessageValidationError> {
        let actual = text.char_count();
        if actual > self.max_text_length {
            return Err(MessageValidationError::TextTooLong {
                max: self.max_text_length,
                actual,
            });
        }
        Ok(())
    }

    /// Checks a tag list against the count and per-tag length limits.
    ///
    /// # Errors
    ///
    /// Returns [`MessageValidationError::TooManyTags`] or
    /// [`MessageValidationError::TagTooLong`] for the first violation found.
    pub fn check_tags(&self, tags: &[String]) -> Result<(), MessageValidationError> {
        if tags.len() > self.max_tags {
            return Err(MessageValidationError::TooManyTags {
                max: self.max_tags,
                actual: tags.len(),
            });
        }
        if let Some(index) = tags
            .iter()
            .position(|tag| tag.chars().count() > self.max_tag_length)
        {
            return Err(MessageValidationError::TagTooLong {
                index,
                max: self.max_tag_length,
            });
        }
        Ok(())
    }
}
