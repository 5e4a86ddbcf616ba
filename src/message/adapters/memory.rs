//! In-memory implementation of the `ChatMessageRepository` port.
//!
//! Provides a thread-safe repository for tests and embedding without a
//! database. Not suitable for production use.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::message::{
    domain::{ChatMessage, MessageId, MessagePatch, NewChatMessage},
    ports::{ChatMessageRepository, RepositoryError, RepositoryResult},
};

/// Thread-safe in-memory chat message repository.
///
/// Identifiers are random UUIDs generated on insert. Patches are applied
/// under the write lock, so concurrent updates never interleave.
///
/// # Example
///
/// ```
/// use parlour::message::adapters::memory::InMemoryChatMessageRepository;
///
/// let repo = InMemoryChatMessageRepository::new();
/// assert!(repo.is_empty()?);
/// # Ok::<(), parlour::message::ports::RepositoryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatMessageRepository {
    messages: Arc<RwLock<HashMap<MessageId, ChatMessage>>>,
}

impl InMemoryChatMessageRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored messages, deleted ones included.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] if the internal lock is
    /// poisoned.
    pub fn len(&self) -> RepositoryResult<usize> {
        let guard = self.messages.read().map_err(|err| lock_poisoned(&err))?;
        Ok(guard.len())
    }

    /// Returns `true` if no messages are stored.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] if the internal lock is
    /// poisoned.
    pub fn is_empty(&self) -> RepositoryResult<bool> {
        self.len().map(|count| count == 0)
    }

    /// Stores a fully formed record under its own identifier.
    ///
    /// Used to seed fixtures whose identifiers must be known up front.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateMessage`] when the identifier is
    /// already present.
    pub fn seed(&self, message: ChatMessage) -> RepositoryResult<()> {
        let mut guard = self.messages.write().map_err(|err| lock_poisoned(&err))?;
        if guard.contains_key(&message.id()) {
            return Err(RepositoryError::DuplicateMessage(message.id()));
        }
        guard.insert(message.id(), message);
        Ok(())
    }

    /// Poisons the store lock by panicking while holding it.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let messages = Arc::clone(&self.messages);
        let outcome = std::thread::spawn(move || {
            if let Ok(_guard) = messages.write() {
                panic!("message store poisoned for test");
            }
        })
        .join();
        drop(outcome);
    }
}

fn lock_poisoned(err: &impl std::fmt::Display) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ChatMessageRepository for InMemoryChatMessageRepository {
    async fn insert(&self, message: &NewChatMessage) -> RepositoryResult<ChatMessage> {
        let stored = message.clone().into_stored(MessageId::new());
        self.seed(stored.clone())?;
        Ok(stored)
    }

    async fn find_by_id(&self, id: MessageId) -> RepositoryResult<Option<ChatMessage>> {
        let guard = self.messages.read().map_err(|err| lock_poisoned(&err))?;
        Ok(guard.get(&id).cloned())
    }

    async fn update_by_id(
        &self,
        id: MessageId,
        patch: &MessagePatch,
    ) -> RepositoryResult<Option<ChatMessage>> {
        let mut guard = self.messages.write().map_err(|err| lock_poisoned(&err))?;
        let updated = guard.get_mut(&id).map(|message| {
            message.apply(patch);
            message.clone()
        });
        Ok(updated)
    }
}
