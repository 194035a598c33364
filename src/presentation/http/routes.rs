//! Route Configuration
//!
//! Everything under `/chats/` goes through [`dispatch`], which resolves the
//! path by hand instead of through axum's matcher:
//!
//! | Path after `/chats/`         | Method | Operation    |
//! |------------------------------|--------|--------------|
//! | (empty)                      | POST   | create chat  |
//! | `{id}`                       | GET    | get chat     |
//! | `{id}`                       | DELETE | delete chat  |
//! | `{id}/messages/`             | POST   | send message |
//!
//! Other methods on these shapes get 405, other shapes 404. A malformed id
//! is a 400 before either check. The path is percent-decoded first, so
//! `/chats/%31` is chat 1. The nested shape only matches when the path ends
//! in `/`, so `/chats/1/messages` is a 404.

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};

use super::handlers;
use crate::shared::error::AppError;
use crate::startup::AppState;

const CHATS_PREFIX: &str = "/chats/";

/// A resolved request against the chats resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRoute {
    CreateChat,
    GetChat(i64),
    DeleteChat(i64),
    SendMessage(i64),
}

impl ChatRoute {
    /// Resolve a request path and method into an operation.
    pub fn resolve(method: &Method, path: &str) -> Result<Self, AppError> {
        let decoded = urlencoding::decode(path)
            .map_err(|_| AppError::BadRequest("invalid path".into()))?;
        let path = decoded.as_ref();
        let rest = path.strip_prefix(CHATS_PREFIX).unwrap_or(path);
        let trimmed = rest.trim_matches('/');

        if trimmed.is_empty() {
            return match *method {
                Method::POST => Ok(Self::CreateChat),
                _ => Err(AppError::MethodNotAllowed),
            };
        }

        let mut segments = trimmed.split('/');
        let id = parse_chat_id(segments.next().unwrap_or_default())?;
        let tail: Vec<&str> = segments.collect();

        match tail.as_slice() {
            [] => match *method {
                Method::GET => Ok(Self::GetChat(id)),
                Method::DELETE => Ok(Self::DeleteChat(id)),
                _ => Err(AppError::MethodNotAllowed),
            },
            ["messages"] if path.ends_with('/') => match *method {
                Method::POST => Ok(Self::SendMessage(id)),
                _ => Err(AppError::MethodNotAllowed),
            },
            _ => Err(AppError::NotFound("not found".into())),
        }
    }

    /// Operation name used in logs.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::CreateChat => "create_chat",
            Self::GetChat(_) => "get_chat",
            Self::DeleteChat(_) => "delete_chat",
            Self::SendMessage(_) => "send_message",
        }
    }
}

/// Chat ids are non-negative integers.
fn parse_chat_id(segment: &str) -> Result<i64, AppError> {
    segment
        .parse::<i64>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| AppError::BadRequest("invalid chat id".into()))
}

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/chats/", any(dispatch))
        .route("/chats/{*path}", any(dispatch))
        .with_state(state)
}

/// Resolve the route, run the handler and render whatever it returns.
async fn dispatch(State(state): State<AppState>, method: Method, uri: Uri, body: Bytes) -> Response {
    let route = match ChatRoute::resolve(&method, uri.path()) {
        Ok(route) => route,
        Err(err) => {
            tracing::warn!(method = %method, path = %uri.path(), error = %err, "request not routed");
            return err.into_response();
        }
    };

    let result = match route {
        ChatRoute::CreateChat => handlers::chat::create_chat(&state, &body).await,
        ChatRoute::GetChat(id) => handlers::chat::get_chat(&state, id, &body).await,
        ChatRoute::DeleteChat(id) => handlers::chat::delete_chat(&state, id).await,
        ChatRoute::SendMessage(id) => handlers::message::send_message(&state, id, &body).await,
    };

    result.unwrap_or_else(|err| {
        if err.status_code().is_client_error() {
            tracing::warn!(operation = route.operation(), error = %err, "request rejected");
        }
        err.into_response()
    })
}
