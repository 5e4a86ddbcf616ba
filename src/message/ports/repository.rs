//! Repository port for chat message persistence.
//!
//! Defines the abstract interface to the document store holding messages,
//! allowing different persistence implementations (`PostgreSQL`, in-memory).

use crate::message::domain::{ChatMessage, MessageId, MessagePatch, NewChatMessage};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Port for chat message persistence operations.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Identifiers are generated by the backend and unique across the store
/// - Patches are applied atomically, without a read-then-write window
/// - Lookups ignore the soft-delete state
#[async_trait]
pub trait ChatMessageRepository: Send + Sync {
    /// Stores a new message and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateMessage`] when the generated
    /// identifier collides, or [`RepositoryError::Persistence`] when the
    /// backend write fails.
    async fn insert(&self, message: &NewChatMessage) -> RepositoryResult<ChatMessage>;

    /// Finds a message by identifier, deleted or not.
    ///
    /// Returns `None` when the message does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the lookup fails.
    async fn find_by_id(&self, id: MessageId) -> RepositoryResult<Option<ChatMessage>>;

    /// Applies a field-level patch and returns the updated message.
    ///
    /// Returns `None` when the message does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the update fails.
    async fn update_by_id(
        &self,
        id: MessageId,
        patch: &MessagePatch,
    ) -> RepositoryResult<Option<ChatMessage>>;
}

/// Errors returned by chat message repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A message with the same identifier already exists.
    #[error("duplicate message identifier: {0}")]
    DuplicateMessage(MessageId),

    /// A stored row could not be mapped back to a domain message.
    #[error("corrupt message record {id}: {reason}")]
    CorruptRecord {
        /// Identifier of the offending record.
        id: MessageId,
        /// Description of the mapping failure.
        reason: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Reports a record that cannot be reconstructed.
    #[must_use]
    pub fn corrupt(id: MessageId, reason: impl Into<String>) -> Self {
        Self::CorruptRecord {
            id,
            reason: reason.into(),
        }
    }
}
