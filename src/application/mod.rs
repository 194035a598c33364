//! Application Layer
//!
//! Request decoding rules and response shapes that sit between the HTTP
//! handlers and the domain.

pub mod dto;
