//! Diesel row models for chat message persistence.

use super::schema::chat_messages;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

/// Query result row for chat message records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chat_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ChatMessageRow {
    /// Message identifier.
    pub id: Uuid,
    /// Owning conversation identifier.
    pub conversation_id: Uuid,
    /// Authoring user identifier.
    pub sender_id: Uuid,
    /// Message body.
    pub text: String,
    /// Ordered message tags.
    pub tags: Vec<String>,
    /// Users who liked the message.
    pub likes: Vec<Uuid>,
    /// Stored like counter.
    pub likes_count: i64,
    /// Reaction records as JSONB.
    pub reactions: Value,
    /// Resolution flag.
    pub resolved: bool,
    /// Soft-delete flag.
    pub deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for chat message records.
///
/// The identifier is omitted so the database default generates it.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = chat_messages)]
pub struct NewChatMessageRow {
    /// Owning conversation identifier.
    pub conversation_id: Uuid,
    /// Authoring user identifier.
    pub sender_id: Uuid,
    /// Message body.
    pub text: String,
    /// Ordered message tags.
    pub tags: Vec<String>,
    /// Users who liked the message.
    pub likes: Vec<Uuid>,
    /// Stored like counter.
    pub likes_count: i64,
    /// Reaction records as JSONB.
    pub reactions: Value,
    /// Resolution flag.
    pub resolved: bool,
    /// Soft-delete flag.
    pub deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Field-level update for chat message records.
///
/// `None` fields are left untouched by the generated `UPDATE`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = chat_messages)]
pub struct ChatMessageChangeset {
    /// Replacement tags.
    pub tags: Option<Vec<String>>,
    /// Soft-delete flag; only ever set to `true`.
    pub deleted: Option<bool>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}
