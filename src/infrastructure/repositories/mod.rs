//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits. Failures are
//! returned as [`RepositoryError`](crate::shared::error::RepositoryError)
//! through the `From<sqlx::Error>` conversion in the database module.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use chat_api::infrastructure::repositories::{PgChatRepository, PgMessageRepository};
//!
//! fn setup_repositories(pool: PgPool) {
//!     let chat_repo = PgChatRepository::new(pool.clone());
//!     let message_repo = PgMessageRepository::new(pool);
//! }
//! ```

pub mod chat_repository;
pub mod message_repository;

pub use chat_repository::PgChatRepository;
pub use message_repository::PgMessageRepository;
