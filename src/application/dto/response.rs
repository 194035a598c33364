//! Response DTOs
//!
//! Data structures for API response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Chat, ChatWithMessages, Message};

/// Chat response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<Chat> for ChatResponse {
    fn from(chat: Chat) -> Self {
        Self {
            id: chat.id,
            title: chat.title,
            created_at: chat.created_at,
        }
    }
}

/// Chat response including a page of its messages, oldest first
#[derive(Debug, Serialize)]
pub struct ChatWithMessagesResponse {
    #[serde(flatten)]
    pub chat: ChatResponse,
    pub messages: Vec<MessageResponse>,
}

impl From<ChatWithMessages> for ChatWithMessagesResponse {
    fn from(value: ChatWithMessages) -> Self {
        Self {
            chat: ChatResponse::from(value.chat),
            messages: value.messages.into_iter().map(MessageResponse::from).collect(),
        }
    }
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub chat_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            chat_id: message.chat_id,
            text: message.text,
            created_at: message.created_at,
        }
    }
}
