//! `PostgreSQL` repository implementation for chat message storage.

use super::{
    models::{ChatMessageChangeset, ChatMessageRow, NewChatMessageRow},
    schema::chat_messages,
};
use crate::message::{
    domain::{
        ChatMessage, ConversationId, DeletionState, MessageId, MessagePatch, MessageText,
        NewChatMessage, PersistedChatMessageData, Reaction, UserId,
    },
    ports::{ChatMessageRepository, RepositoryError, RepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use serde_json::Value;

/// `PostgreSQL` connection pool type used by message adapters.
pub type MessagePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed chat message repository.
///
/// Identifiers come from the column default (`gen_random_uuid()`), and every
/// patch is a single `UPDATE ... RETURNING` statement.
///
/// # Example
///
/// ```ignore
/// use diesel::r2d2::{ConnectionManager, Pool};
/// use diesel::PgConnection;
/// use parlour::message::adapters::postgres::PostgresChatMessageRepository;
///
/// let manager = ConnectionManager::<PgConnection>::new("postgres://...");
/// let pool = Pool::builder().build(manager).expect("pool");
/// let repo = PostgresChatMessageRepository::new(pool);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresChatMessageRepository {
    pool: MessagePgPool,
}

impl PostgresChatMessageRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: MessagePgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub const fn pool(&self) -> &MessagePgPool {
        &self.pool
    }

    async fn run_blocking<F, T>(&self, f: F) -> RepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(RepositoryError::persistence)?
    }
}

#[async_trait]
impl ChatMessageRepository for PostgresChatMessageRepository {
    async fn insert(&self, message: &NewChatMessage) -> RepositoryResult<ChatMessage> {
        let new_row = to_new_row(message);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(chat_messages::table)
                .values(&new_row)
                .returning(ChatMessageRow::as_returning())
                .get_result::<ChatMessageRow>(connection)
                .map_err(RepositoryError::persistence)?;
            row_to_message(row)
        })
        .await
    }

    async fn find_by_id(&self, id: MessageId) -> RepositoryResult<Option<ChatMessage>> {
        self.run_blocking(move |connection| {
            let row = chat_messages::table
                .filter(chat_messages::id.eq(id.into_inner()))
                .select(ChatMessageRow::as_select())
                .first::<ChatMessageRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_message).transpose()
        })
        .await
    }

    async fn update_by_id(
        &self,
        id: MessageId,
        patch: &MessagePatch,
    ) -> RepositoryResult<Option<ChatMessage>> {
        let changeset = to_changeset(patch);
        self.run_blocking(move |connection| {
            let row = diesel::update(chat_messages::table.find(id.into_inner()))
                .set(&changeset)
                .returning(ChatMessageRow::as_returning())
                .get_result::<ChatMessageRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_message).transpose()
        })
        .await
    }
}

pub(crate) fn to_new_row(message: &NewChatMessage) -> NewChatMessageRow {
    NewChatMessageRow {
        conversation_id: message.conversation_id().into_inner(),
        sender_id: message.sender_id().into_inner(),
        text: message.text().as_str().to_owned(),
        tags: message.tags().to_vec(),
        likes: Vec::new(),
        likes_count: 0,
        reactions: Value::Array(Vec::new()),
        resolved: false,
        deleted: false,
        created_at: message.created_at(),
        updated_at: message.created_at(),
    }
}

pub(crate) fn to_changeset(patch: &MessagePatch) -> ChatMessageChangeset {
    ChatMessageChangeset {
        tags: patch.tags().map(<[String]>::to_vec),
        // Never written as `false`, so a deleted row stays deleted.
        deleted: patch.marks_deleted().then_some(true),
        updated_at: patch.updated_at(),
    }
}

pub(crate) fn row_to_message(row: ChatMessageRow) -> RepositoryResult<ChatMessage> {
    let ChatMessageRow {
        id,
        conversation_id,
        sender_id,
        text: persisted_text,
        tags,
        likes,
        likes_count: persisted_likes_count,
        reactions: persisted_reactions,
        resolved,
        deleted,
        created_at,
        updated_at,
    } = row;
    let message_id = MessageId::from_uuid(id);

    let text = MessageText::new(persisted_text)
        .map_err(|err| RepositoryError::corrupt(message_id, err.to_string()))?;
    let likes_count = u64::try_from(persisted_likes_count)
        .map_err(|err| RepositoryError::corrupt(message_id, err.to_string()))?;
    let reactions = serde_json::from_value::<Vec<Reaction>>(persisted_reactions)
        .map_err(|err| RepositoryError::corrupt(message_id, err.to_string()))?;

    let data = PersistedChatMessageData {
        id: message_id,
        conversation_id: ConversationId::from_uuid(conversation_id),
        sender_id: UserId::from_uuid(sender_id),
        text,
        tags,
        likes: likes.into_iter().map(UserId::from_uuid).collect(),
        likes_count,
        reactions,
        resolved,
        deletion: DeletionState::from(deleted),
        created_at,
        updated_at,
    };
    Ok(ChatMessage::from_persisted(data))
}
