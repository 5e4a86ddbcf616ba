//! Stored chat message record and the values used to create and patch it.

use super::{ConversationId, DeletionState, MessageId, MessageText, MessageValidationError};
use super::{Reaction, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A chat message as held by the persistence backend.
///
/// The record stores raw sender and conversation identifiers only; the
/// reference views returned to callers are produced by
/// [`Message::project`](super::Message::project).
///
/// # Invariants
///
/// - `id`, `conversation_id`, and `sender_id` never change once stored
/// - `tags` keep insertion order and are not deduplicated
/// - a deleted message never becomes active again
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    id: MessageId,
    conversation_id: ConversationId,
    sender_id: UserId,
    text: MessageText,
    tags: Vec<String>,
    likes: Vec<UserId>,
    likes_count: u64,
    reactions: Vec<Reaction>,
    resolved: bool,
    #[serde(rename = "deleted")]
    deletion: DeletionState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedChatMessageData {
    /// Persisted message identifier.
    pub id: MessageId,
    /// Owning conversation.
    pub conversation_id: ConversationId,
    /// Authoring user.
    pub sender_id: UserId,
    /// Message body.
    pub text: MessageText,
    /// Ordered tags.
    pub tags: Vec<String>,
    /// Users who liked the message.
    pub likes: Vec<UserId>,
    /// Stored like counter.
    pub likes_count: u64,
    /// Reactions left on the message.
    pub reactions: Vec<Reaction>,
    /// Whether the message has been resolved.
    pub resolved: bool,
    /// Soft-delete state.
    pub deletion: DeletionState,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Reconstructs a message from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedChatMessageData) -> Self {
        Self {
            id: data.id,
            conversation_id: data.conversation_id,
            sender_id: data.sender_id,
            text: data.text,
            tags: data.tags,
            likes: data.likes,
            likes_count: data.likes_count,
            reactions: data.reactions,
            resolved: data.resolved,
            deletion: data.deletion,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the owning conversation identifier.
    #[must_use]
    pub const fn conversation_id(&self) -> ConversationId {
        self.conversation_id
    }

    /// Returns the sender identifier.
    #[must_use]
    pub const fn sender_id(&self) -> UserId {
        self.sender_id
    }

    /// Returns the message body.
    #[must_use]
    pub const fn text(&self) -> &MessageText {
        &self.text
    }

    /// Returns the tags in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the users who liked the message.
    #[must_use]
    pub fn likes(&self) -> &[UserId] {
        &self.likes
    }

    /// Returns the stored like counter.
    #[must_use]
    pub const fn likes_count(&self) -> u64 {
        self.likes_count
    }

    /// Returns the reactions left on the message.
    #[must_use]
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// Returns whether the message has been resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Returns the soft-delete state.
    #[must_use]
    pub const fn deletion(&self) -> DeletionState {
        self.deletion
    }

    /// Returns `true` once the message has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deletion.is_deleted()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a field-level patch in place.
    ///
    /// Identity, sender, conversation, and body are never touched.
    pub fn apply(&mut self, patch: &MessagePatch) {
        if let Some(tags) = patch.tags() {
            self.tags = tags.to_vec();
        }
        if patch.marks_deleted() {
            self.deletion = self.deletion.delete();
        }
        self.updated_at = patch.updated_at();
    }
}

/// A message that has been validated but not yet stored.
///
/// Collections default to empty, the like counter to zero, and the flags to
/// unresolved and active. The backend assigns the identifier on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChatMessage {
    conversation_id: ConversationId,
    sender_id: UserId,
    text: MessageText,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
}

impl NewChatMessage {
    /// Creates a new message with no tags.
    ///
    /// # Errors
    ///
    /// Returns [`MessageValidationError::MissingConversationId`] or
    /// [`MessageValidationError::MissingSenderId`] when either identifier is
    /// nil.
    pub fn new(
        conversation_id: ConversationId,
        sender_id: UserId,
        text: MessageText,
        clock: &impl Clock,
    ) -> Result<Self, MessageValidationError> {
        if conversation_id.is_nil() {
            return Err(MessageValidationError::MissingConversationId);
        }
        if sender_id.is_nil() {
            return Err(MessageValidationError::MissingSenderId);
        }

        Ok(Self {
            conversation_id,
            sender_id,
            text,
            tags: Vec::new(),
            created_at: clock.utc(),
        })
    }

    /// Sets the message tags, keeping their order.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Returns the owning conversation identifier.
    #[must_use]
    pub const fn conversation_id(&self) -> ConversationId {
        self.conversation_id
    }

    /// Returns the sender identifier.
    #[must_use]
    pub const fn sender_id(&self) -> UserId {
        self.sender_id
    }

    /// Returns the message body.
    #[must_use]
    pub const fn text(&self) -> &MessageText {
        &self.text
    }

    /// Returns the tags in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Materialises the stored record under a backend-assigned identifier.
    #[must_use]
    pub fn into_stored(self, id: MessageId) -> ChatMessage {
        ChatMessage {
            id,
            conversation_id: self.conversation_id,
            sender_id: self.sender_id,
            text: self.text,
            tags: self.tags,
            likes: Vec::new(),
            likes_count: 0,
            reactions: Vec::new(),
            resolved: false,
            deletion: DeletionState::Active,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Partial update applied atomically by the persistence backend.
///
/// A patch can replace tags and mark a message deleted. There is no way to
/// express an un-delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePatch {
    tags: Option<Vec<String>>,
    mark_deleted: bool,
    updated_at: DateTime<Utc>,
}

impl MessagePatch {
    /// Creates an empty patch stamped with the current clock time.
    #[must_use]
    pub fn new(clock: &impl Clock) -> Self {
        Self {
            tags: None,
            mark_deleted: false,
            updated_at: clock.utc(),
        }
    }

    /// Replaces the tags wholesale; an empty list clears them.
    #[must_use]
    pub fn replace_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// Marks the message soft-deleted.
    #[must_use]
    pub const fn mark_deleted(mut self) -> Self {
        self.mark_deleted = true;
        self
    }

    /// Returns the replacement tags, if any.
    #[must_use]
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    /// Returns `true` when the patch soft-deletes the message.
    #[must_use]
    pub const fn marks_deleted(&self) -> bool {
        self.mark_deleted
    }

    /// Returns the timestamp recorded as the message's latest mutation.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
