//! # Chat API Library
//!
//! A small HTTP API for chats and the messages they contain:
//! - `POST /chats/`, `GET /chats/{id}`, `DELETE /chats/{id}`
//! - `POST /chats/{id}/messages/`
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! - **Domain Layer**: Chat and Message entities and repository traits
//! - **Application Layer**: request validation and response DTOs
//! - **Infrastructure Layer**: PostgreSQL pool and repository implementations
//! - **Presentation Layer**: routing, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! chat_api/
//! +-- config/         Configuration management
//! +-- domain/         Entities and repository traits
//! +-- application/    Request/response DTOs
//! +-- infrastructure/ Database pool and repositories
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Errors and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - entities and repository contract
pub mod domain;

// Application layer - DTOs
pub mod application;

// Infrastructure layer - PostgreSQL implementations
pub mod infrastructure;

// Presentation layer - HTTP
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
