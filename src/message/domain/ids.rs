//! Identifier newtypes for messages and the collaborators they reference.
//!
//! These types wrap UUIDs so message, conversation, and user identifiers
//! cannot be mixed up. The canonical string form is the hyphenated UUID
//! (`8-4-4-4-12` hex digits); `FromStr` accepts nothing else, so simple,
//! braced, and URN spellings and surrounding whitespace are rejected.

use super::MessageValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the hyphenated UUID form; every other spelling differs.
const HYPHENATED_LEN: usize = 36;

fn parse_hyphenated(value: &str) -> Option<Uuid> {
    if value.len() != HYPHENATED_LEN {
        return None;
    }
    Uuid::parse_str(value).ok()
}

/// Unique identifier for a chat message.
///
/// Identifiers are assigned by the persistence backend when a message is
/// inserted.
///
/// # Examples
///
/// ```
/// use parlour::message::domain::MessageId;
///
/// let id = MessageId::new();
/// let parsed: MessageId = id.to_string().parse().expect("canonical form");
/// assert_eq!(parsed, id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random message identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a message identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for MessageId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MessageId {
    type Err = MessageValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_hyphenated(value)
            .map(Self)
            .ok_or_else(|| MessageValidationError::InvalidMessageId(value.to_owned()))
    }
}

/// Identifier of the conversation a message belongs to.
///
/// Conversations live in another service; this crate only carries the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(Uuid);

impl ConversationId {
    /// Creates a new random conversation identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a conversation identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Returns `true` for the nil UUID, which stands for an absent id.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for ConversationId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ConversationId {
    type Err = MessageValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_hyphenated(value)
            .map(Self)
            .ok_or_else(|| MessageValidationError::InvalidConversationId(value.to_owned()))
    }
}

/// Identifier of a chat user (message sender or liker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Returns `true` for the nil UUID, which stands for an absent id.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for UserId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = MessageValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_hyphenated(value)
            .map(Self)
            .ok_or_else(|| MessageValidationError::InvalidUserId(value.to_owned()))
    }
}
