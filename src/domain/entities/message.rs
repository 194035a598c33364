//! Message entity and repository trait.
//!
//! Maps to the `messages` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::shared::error::RepositoryError;

/// Represents a message in a chat.
///
/// Maps to the `messages` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - chat_id: BIGINT NOT NULL REFERENCES chats(id) ON DELETE CASCADE
/// - text: VARCHAR(5000) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i64,

    /// Owning chat
    pub chat_id: i64,

    pub text: String,

    pub created_at: DateTime<Utc>,
}

/// Repository trait for Message data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Create a new message in the given chat.
    ///
    /// A missing chat surfaces as `Conflict` (foreign-key violation).
    async fn create(&self, chat_id: i64, text: &str) -> Result<Message, RepositoryError>;
}
