//! Application services for chat message persistence.

mod config;
mod message_data;

pub use config::MessageDataConfig;
pub use message_data::{
    CreateMessageInput, MessageData, MessageDataError, MessageDataResult,
};
