//! Validation errors for message values.

use thiserror::Error;

/// Errors returned while constructing domain message values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageValidationError {
    /// The conversation identifier is missing (nil).
    #[error("conversation id is required")]
    MissingConversationId,

    /// The sender identifier is missing (nil).
    #[error("sender id is required")]
    MissingSenderId,

    /// The message text is empty after trimming.
    #[error("message text must not be empty")]
    EmptyText,

    /// The message text exceeds the configured length limit.
    #[error("message text has {actual} characters, exceeds limit of {max}")]
    TextTooLong {
        /// The maximum allowed number of characters.
        max: usize,
        /// The actual number of characters.
        actual: usize,
    },

    /// More tags were supplied than the configured limit allows.
    #[error("message has {actual} tags, exceeds limit of {max}")]
    TooManyTags {
        /// The maximum allowed number of tags.
        max: usize,
        /// The actual number of tags.
        actual: usize,
    },

    /// A single tag exceeds the configured length limit.
    #[error("tag at index {index} exceeds limit of {max} characters")]
    TagTooLong {
        /// Position of the offending tag.
        index: usize,
        /// The maximum allowed number of characters.
        max: usize,
    },

    /// The value is not a canonical message identifier.
    #[error("invalid message id '{0}'")]
    InvalidMessageId(String),

    /// The value is not a canonical conversation identifier.
    #[error("invalid conversation id '{0}'")]
    InvalidConversationId(String),

    /// The value is not a canonical user identifier.
    #[error("invalid user id '{0}'")]
    InvalidUserId(String),
}
