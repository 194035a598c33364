//! Message Handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::{MessageResponse, SendMessageRequest};
use crate::presentation::http::extractors::StrictJson;
use crate::shared::error::{AppError, RepositoryError};
use crate::startup::AppState;

/// Send message to chat
///
/// The chat is looked up first so a missing chat is a 404 rather than the
/// 409 the foreign key would produce.
pub async fn send_message(state: &AppState, chat_id: i64, body: &[u8]) -> Result<Response, AppError> {
    let StrictJson(request) = StrictJson::<SendMessageRequest>::from_bytes(body)?;
    let request = request.validated()?;

    let chat = state.chats.find_by_id(chat_id).await.map_err(|e| match e {
        RepositoryError::NotFound => AppError::NotFound("chat not found".into()),
        e => {
            tracing::error!(
                operation = "send_message",
                error = %e,
                chat_id,
                text = %request.text,
                "failed to get chat by ID"
            );
            AppError::Internal(e.to_string())
        }
    })?;

    let message = state
        .messages
        .create(chat.id, &request.text)
        .await
        .map_err(|e| {
            tracing::error!(
                operation = "send_message",
                error = %e,
                chat_id,
                text = %request.text,
                "failed to add message to chat"
            );
            AppError::from(e)
        })?;

    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))).into_response())
}
