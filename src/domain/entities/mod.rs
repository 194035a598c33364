//! # Domain Entities
//!
//! - **Chat**: the aggregate root, a titled container of messages
//! - **Message**: a text record owned by exactly one chat
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod chat;
mod message;

pub use chat::{Chat, ChatRepository, ChatWithMessages};
pub use message::{Message, MessageRepository};

#[cfg(test)]
pub use chat::MockChatRepository;
#[cfg(test)]
pub use message::MockMessageRepository;
