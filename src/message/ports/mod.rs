//! Port contracts for chat message persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by message services.

pub mod repository;

pub use repository::{ChatMessageRepository, RepositoryError, RepositoryResult};
