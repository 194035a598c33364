//! Chat entity and repository trait.
//!
//! Maps to the `chats` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::message::Message;
use crate::shared::error::RepositoryError;

/// A titled container of messages.
///
/// Maps to the `chats` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - title: VARCHAR(200) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A chat together with a bounded, oldest-first page of its messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatWithMessages {
    pub chat: Chat,
    pub messages: Vec<Message>,
}

/// Repository trait for Chat data access operations.
///
/// Implementations must translate every storage failure into a
/// [`RepositoryError`] kind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Insert a chat with the given (already validated) title.
    async fn create(&self, title: &str) -> Result<Chat, RepositoryError>;

    /// Find a chat by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Chat, RepositoryError>;

    /// Find a chat and at most `limit` of its messages, ordered by
    /// creation time ascending.
    async fn find_by_id_with_messages(
        &self,
        id: i64,
        limit: i64,
    ) -> Result<ChatWithMessages, RepositoryError>;

    /// Delete a chat. Returns `NotFound` when no row was affected.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
