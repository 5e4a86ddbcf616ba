//! `PostgreSQL` adapters for chat message persistence.

mod models;
mod repository;
mod schema;

pub use repository::{MessagePgPool, PostgresChatMessageRepository};

#[cfg(test)]
pub(crate) use models::ChatMessageRow;
#[cfg(test)]
pub(crate) use repository::{row_to_message, to_changeset, to_new_row};
