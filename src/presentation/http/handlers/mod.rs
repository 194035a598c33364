//! HTTP Handlers
//!
//! Each handler decodes and validates its body, calls the repository and
//! renders the result. Routing is done by
//! [`routes::dispatch`](super::routes), not by axum's extractors.

pub mod chat;
pub mod message;
