//! Chat Repository Implementation
//!
//! PostgreSQL implementation of chat operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::message_repository::MessageRow;
use crate::domain::{Chat, ChatRepository, ChatWithMessages};
use crate::shared::error::RepositoryError;

/// PostgreSQL chat repository implementation.
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    /// Creates a new PgChatRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for chat queries.
#[derive(Debug, sqlx::FromRow)]
struct ChatRow {
    id: i64,
    title: String,
    created_at: DateTime<Utc>,
}

impl ChatRow {
    fn into_chat(self) -> Chat {
        Chat {
            id: self.id,
            title: self.title,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    async fn create(&self, title: &str) -> Result<Chat, RepositoryError> {
        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            INSERT INTO chats (title)
            VALUES ($1)
            RETURNING id, title, created_at
            "#,
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_chat())
    }

    async fn find_by_id(&self, id: i64) -> Result<Chat, RepositoryError> {
        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            SELECT id, title, created_at
            FROM chats
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_chat())
    }

    /// Loads the chat, then its oldest `limit` messages.
    ///
    /// Ties on `created_at` are broken by id so the page is stable.
    async fn find_by_id_with_messages(
        &self,
        id: i64,
        limit: i64,
    ) -> Result<ChatWithMessages, RepositoryError> {
        let chat = self.find_by_id(id).await?;

        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, chat_id, text, created_at
            FROM messages
            WHERE chat_id = $1
            ORDER BY created_at ASC, id ASC
            LIMIT $2
            "#,
        )
        .bind(id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(ChatWithMessages {
            chat,
            messages: rows.into_iter().map(|r| r.into_message()).collect(),
        })
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM chats WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
