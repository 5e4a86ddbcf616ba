//! Message data service: create, read, soft-delete, and retag messages.

use super::MessageDataConfig;
use crate::message::{
    domain::{
        ConversationId, Message, MessageId, MessagePatch, MessageText, MessageValidationError,
        NewChatMessage, UserId,
    },
    ports::{ChatMessageRepository, RepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Caller-supplied fields for a new message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMessageInput {
    /// Conversation the message is posted to.
    pub conversation_id: ConversationId,
    /// Message body.
    pub text: String,
}

impl CreateMessageInput {
    /// Creates the input for a message in the given conversation.
    #[must_use]
    pub fn new(conversation_id: ConversationId, text: impl Into<String>) -> Self {
        Self {
            conversation_id,
            text: text.into(),
        }
    }
}

/// Service-level errors for message data operations.
#[derive(Debug, Error)]
pub enum MessageDataError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] MessageValidationError),

    /// No message exists with the requested identifier.
    #[error("message not found: {0}")]
    NotFound(MessageId),

    /// The persistence backend failed; the error is passed through unchanged.
    #[error(transparent)]
    Persistence(#[from] RepositoryError),
}

/// Result type for message data operations.
pub type MessageDataResult<T> = Result<T, MessageDataError>;

/// Message persistence service.
///
/// Every operation is a single round trip to the repository, and every
/// returned [`Message`] carries sender and conversation views projected from
/// the stored identifiers.
pub struct MessageData<R, C>
where
    R: ChatMessageRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: MessageDataConfig,
}

impl<R, C> Clone for MessageData<R, C>
where
    R: ChatMessageRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            config: self.config.clone(),
        }
    }
}

impl<R, C> MessageData<R, C>
where
    R: ChatMessageRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default input limits.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, MessageDataConfig::default())
    }

    /// Creates a service with explicit input limits.
    #[must_use]
    pub const fn with_config(repository: Arc<R>, clock: Arc<C>, config: MessageDataConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Returns the active input limits.
    #[must_use]
    pub const fn config(&self) -> &MessageDataConfig {
        &self.config
    }

    /// Creates and stores a new message.
    ///
    /// Omitted tags default to an empty list. Likes, reactions, and the like
    /// counter start empty, and the message starts unresolved and active.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDataError::Validation`] when an identifier is nil,
    /// the text is empty, or a limit is exceeded, and
    /// [`MessageDataError::Persistence`] when the backend write fails.
    pub async fn create(
        &self,
        input: CreateMessageInput,
        sender_id: UserId,
        tags: Option<Vec<String>>,
    ) -> MessageDataResult<Message> {
        let CreateMessageInput {
            conversation_id,
            text,
        } = input;
        let tags = tags.unwrap_or_default();

        let draft = self
            .validate_new(conversation_id, sender_id, text, tags)
            .inspect_err(|err| {
                warn!(%conversation_id, %sender_id, error = %err, "rejected new message");
            })?;

        let stored = self.repository.insert(&draft).await?;
        info!(
            message_id = %stored.id(),
            %conversation_id,
            %sender_id,
            tag_count = stored.tags().len(),
            "created message"
        );
        Ok(Message::project(stored))
    }

    /// Retrieves a message by the hyphenated string form of its identifier.
    ///
    /// Soft-deleted messages are returned as well; callers wanting only
    /// active messages must check [`ChatMessage::is_deleted`].
    ///
    /// [`ChatMessage::is_deleted`]: crate::message::domain::ChatMessage::is_deleted
    ///
    /// # Errors
    ///
    /// Returns [`MessageDataError::Validation`] when `id` is not a hyphenated
    /// UUID, [`MessageDataError::NotFound`] when no message exists, and
    /// [`MessageDataError::Persistence`] when the lookup fails.
    pub async fn get_message(&self, id: &str) -> MessageDataResult<Message> {
        let message_id: MessageId = id.parse()?;
        debug!(%message_id, "fetching message");

        let stored = self.repository.find_by_id(message_id).await?;
        stored
            .map(Message::project)
            .ok_or_else(|| not_found(message_id, "get"))
    }

    /// Soft-deletes a message and returns it.
    ///
    /// Deleting an already deleted message succeeds and leaves it deleted.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDataError::NotFound`] when no message exists and
    /// [`MessageDataError::Persistence`] when the update fails.
    pub async fn delete(&self, id: MessageId) -> MessageDataResult<Message> {
        debug!(message_id = %id, "soft-deleting message");
        let patch = MessagePatch::new(&*self.clock).mark_deleted();

        let updated = self.repository.update_by_id(id, &patch).await?;
        let message = updated
            .map(Message::project)
            .ok_or_else(|| not_found(id, "delete"))?;
        info!(
            message_id = %id,
            state = message.record().deletion().as_str(),
            "message marked deleted"
        );
        Ok(message)
    }

    /// Replaces a message's tags in full and returns the updated message.
    ///
    /// An empty list clears all tags.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDataError::Validation`] when the tags exceed the
    /// configured limits, [`MessageDataError::NotFound`] when no message
    /// exists, and [`MessageDataError::Persistence`] when the update fails.
    pub async fn update_message(
        &self,
        id: MessageId,
        tags: Vec<String>,
    ) -> MessageDataResult<Message> {
        debug!(message_id = %id, tag_count = tags.len(), "replacing message tags");
        self.config.check_tags(&tags).inspect_err(|err| {
            warn!(message_id = %id, error = %err, "rejected tag update");
        })?;
        let patch = MessagePatch::new(&*self.clock).replace_tags(tags);

        let updated = self.repository.update_by_id(id, &patch).await?;
        updated
            .map(Message::project)
            .ok_or_else(|| not_found(id, "update"))
    }

    fn validate_new(
        &self,
        conversation_id: ConversationId,
        sender_id: UserId,
        text: String,
        tags: Vec<String>,
    ) -> Result<NewChatMessage, MessageValidationError> {
        let text = MessageText::new(text)?;
        self.config.check_text(&text)?;
        self.config.check_tags(&tags)?;
        let draft = NewChatMessage::new(conversation_id, sender_id, text, &*self.clock)?;
        Ok(draft.with_tags(tags))
    }
}

fn not_found(id: MessageId, operation: &'static str) -> MessageDataError {
    warn!(message_id = %id, operation, "message not found");
    MessageDataError::NotFound(id)
}
