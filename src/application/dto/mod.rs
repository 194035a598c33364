//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{CreateChatRequest, GetChatRequest, SendMessageRequest, DEFAULT_MESSAGE_LIMIT};
pub use response::{ChatResponse, ChatWithMessagesResponse, MessageResponse};
