//! Persistence adapters for the message module.
//!
//! Concrete implementations of the [`ChatMessageRepository`] port:
//!
//! - [`memory::InMemoryChatMessageRepository`]: thread-safe in-memory
//!   storage for tests
//! - [`postgres::PostgresChatMessageRepository`]: `PostgreSQL` persistence
//!   using Diesel
//!
//! [`ChatMessageRepository`]: crate::message::ports::ChatMessageRepository

pub mod memory;
pub mod postgres;
