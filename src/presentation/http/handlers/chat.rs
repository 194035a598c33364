//! Chat Handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::{
    ChatResponse, ChatWithMessagesResponse, CreateChatRequest, GetChatRequest,
};
use crate::presentation::http::extractors::StrictJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a chat
pub async fn create_chat(state: &AppState, body: &[u8]) -> Result<Response, AppError> {
    let StrictJson(request) = StrictJson::<CreateChatRequest>::from_bytes(body)?;
    let request = request.validated()?;

    let chat = state.chats.create(&request.title).await.map_err(|e| {
        tracing::error!(
            operation = "create_chat",
            error = %e,
            title = %request.title,
            "failed to create chat"
        );
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(ChatResponse::from(chat))).into_response())
}

/// Get a chat with its oldest `limit` messages
pub async fn get_chat(state: &AppState, chat_id: i64, body: &[u8]) -> Result<Response, AppError> {
    let StrictJson(request) = StrictJson::<GetChatRequest>::from_bytes(body)?;
    let limit = request.validated()?.limit();

    let chat = state
        .chats
        .find_by_id_with_messages(chat_id, limit)
        .await
        .map_err(|e| {
            tracing::error!(
                operation = "get_chat",
                error = %e,
                chat_id,
                limit,
                "failed to get chat by ID with messages"
            );
            AppError::from(e)
        })?;

    Ok((StatusCode::OK, Json(ChatWithMessagesResponse::from(chat))).into_response())
}

/// Delete a chat
pub async fn delete_chat(state: &AppState, chat_id: i64) -> Result<Response, AppError> {
    state.chats.delete(chat_id).await.map_err(|e| {
        tracing::error!(
            operation = "delete_chat",
            error = %e,
            chat_id,
            "failed to delete chat"
        );
        AppError::from(e)
    })?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
