//! Enriched message view returned to callers.

use super::{ChatMessage, ConversationId, MessageId, UserId};
use serde::{Deserialize, Serialize};

/// Read view of the user who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SenderRef {
    /// Sender identifier.
    pub id: UserId,
}

/// Read view of the conversation a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationRef {
    /// Conversation identifier.
    pub id: ConversationId,
}

/// A stored message enriched with sender and conversation reference views.
///
/// Serialises as the flat stored record plus `sender` and `conversation`
/// objects.
///
/// # Examples
///
/// ```
/// use parlour::message::domain::{
///     ConversationId, Message, MessageId, MessageText, NewChatMessage, UserId,
/// };
/// use mockable::DefaultClock;
///
/// let sender_id = UserId::new();
/// let draft = NewChatMessage::new(
///     ConversationId::new(),
///     sender_id,
///     MessageText::new("Hello world").expect("valid text"),
///     &DefaultClock,
/// )
/// .expect("valid message");
/// let message = Message::project(draft.into_stored(MessageId::new()));
///
/// assert_eq!(message.sender().id, sender_id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(flatten)]
    record: ChatMessage,
    sender: SenderRef,
    conversation: ConversationRef,
}

impl Message {
    /// Derives the reference views from the record's raw identifiers.
    #[must_use]
    pub const fn project(record: ChatMessage) -> Self {
        let sender = SenderRef {
            id: record.sender_id(),
        };
        let conversation = ConversationRef {
            id: record.conversation_id(),
        };
        Self {
            record,
            sender,
            conversation,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.record.id()
    }

    /// Returns the underlying stored record.
    #[must_use]
    pub const fn record(&self) -> &ChatMessage {
        &self.record
    }

    /// Consumes the view and returns the stored record.
    #[must_use]
    pub fn into_record(self) -> ChatMessage {
        self.record
    }

    /// Returns the sender reference view.
    #[must_use]
    pub const fn sender(&self) -> SenderRef {
        self.sender
    }

    /// Returns the conversation reference view.
    #[must_use]
    pub const fn conversation(&self) -> ConversationRef {
        self.conversation
    }
}

impl From<ChatMessage> for Message {
    fn from(record: ChatMessage) -> Self {
        Self::project(record)
    }
}
