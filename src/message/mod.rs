//! Chat message persistence for Parlour.
//!
//! This module creates, retrieves, soft-deletes, and retags chat messages,
//! returning each one enriched with reference views of its sender and
//! conversation. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use parlour::message::{
//!     adapters::memory::InMemoryChatMessageRepository,
//!     domain::{ConversationId, UserId},
//!     services::{CreateMessageInput, MessageData},
//! };
//!
//! # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
//! let messages = MessageData::new(
//!     Arc::new(InMemoryChatMessageRepository::new()),
//!     Arc::new(DefaultClock),
//! );
//! let created = messages
//!     .create(
//!         CreateMessageInput::new(ConversationId::new(), "Hello world"),
//!         UserId::new(),
//!         None,
//!     )
//!     .await
//!     .expect("message should be created");
//!
//! assert!(created.record().tags().is_empty());
//! assert!(!created.record().is_deleted());
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
