//! Domain model for chat messages.
//!
//! The domain holds the stored message record, its soft-delete lifecycle, and
//! the enriched view handed to callers. Infrastructure concerns stay outside
//! this boundary.

mod chat_message;
mod deletion;
mod error;
mod ids;
mod reaction;
mod text;
mod view;

pub use chat_message::{ChatMessage, MessagePatch, NewChatMessage, PersistedChatMessageData};
pub use deletion::DeletionState;
pub use error::MessageValidationError;
pub use ids::{ConversationId, MessageId, UserId};
pub use reaction::Reaction;
pub use text::MessageText;
pub use view::{ConversationRef, Message, SenderRef};
