//! HTTP API
//!
//! Router, body decoding and endpoint handlers for the `/chats/` resource.

pub mod extractors;
pub mod handlers;
pub mod routes;

pub use routes::{create_router, ChatRoute};
