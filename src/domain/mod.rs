//! # Domain Layer
//!
//! Entities and the repository contract. Nothing in here knows about HTTP
//! or about the storage engine; repositories report failures through
//! [`RepositoryError`](crate::shared::error::RepositoryError) only.

pub mod entities;

pub use entities::*;
