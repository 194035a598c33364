//! Request Body Decoding
//!
//! Bodies are decoded strictly: unknown fields are rejected by the DTOs
//! (`deny_unknown_fields`) and anything but whitespace after the JSON value
//! is rejected here. Both surface as [`AppError::InvalidJson`].

use serde::de::DeserializeOwned;

use crate::shared::error::AppError;

/// A JSON body decoded under strict rules.
#[derive(Debug)]
pub struct StrictJson<T>(pub T);

impl<T: DeserializeOwned> StrictJson<T> {
    /// Decode a body that must contain exactly one JSON value.
    pub fn from_bytes(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(body).map(Self).map_err(|err| {
            tracing::debug!(error = %err, "request body rejected");
            AppError::InvalidJson
        })
    }
}
