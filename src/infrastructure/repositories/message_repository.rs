//! Message Repository Implementation
//!
//! PostgreSQL implementation of message operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Message, MessageRepository};
use crate::shared::error::RepositoryError;

/// PostgreSQL message repository implementation.
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Creates a new PgMessageRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for message queries.
/// Maps to the messages table schema defined in the migration.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct MessageRow {
    id: i64,
    chat_id: i64,
    text: String,
    created_at: DateTime<Utc>,
}

impl MessageRow {
    /// Converts database row to domain Message entity.
    pub(super) fn into_message(self) -> Message {
        Message {
            id: self.id,
            chat_id: self.chat_id,
            text: self.text,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    /// Create a new message.
    ///
    /// A `chat_id` with no matching chat violates the foreign key and is
    /// reported as `Conflict`.
    async fn create(&self, chat_id: i64, text: &str) -> Result<Message, RepositoryError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (chat_id, text)
            VALUES ($1, $2)
            RETURNING id, chat_id, text, created_at
            "#,
        )
        .bind(chat_id)
        .bind(text)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_message())
    }
}
