//! Parlour: chat message persistence.
//!
//! This crate stores chat messages posted to conversations and returns them
//! enriched with reference views of their sender and conversation. Messages
//! are soft-deleted rather than removed, and their tags can be replaced in
//! full.
//!
//! # Architecture
//!
//! Parlour follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`message`]: Message records, persistence ports, and the message data
//!   service

pub mod message;
