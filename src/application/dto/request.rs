//! Request DTOs
//!
//! Data structures for API request bodies. Every body rejects unknown
//! fields; `validated` trims text fields and applies the length and range
//! limits. String lengths are counted in Unicode code points.

use serde::Deserialize;
use validator::Validate;

use crate::shared::error::AppError;
use crate::shared::validation::{null_as_empty, required_trimmed, validation_error};

/// Page size used when a retrieval request omits `limit` or sends zero.
pub const DEFAULT_MESSAGE_LIMIT: i64 = 20;

/// Create chat request
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateChatRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub title: String,
}

impl CreateChatRequest {
    pub fn validated(self) -> Result<Self, AppError> {
        let request = Self {
            title: required_trimmed("title", &self.title)?,
        };
        request.validate().map_err(validation_error)?;
        Ok(request)
    }
}

/// Send message request
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SendMessageRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(max = 5000, message = "must be at most 5000 characters"))]
    pub text: String,
}

impl SendMessageRequest {
    pub fn validated(self) -> Result<Self, AppError> {
        let request = Self {
            text: required_trimmed("text", &self.text)?,
        };
        request.validate().map_err(validation_error)?;
        Ok(request)
    }
}

/// Get chat request
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct GetChatRequest {
    #[serde(default)]
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
}

impl GetChatRequest {
    /// Applies the default page size, then checks the 1..=100 range.
    pub fn validated(self) -> Result<Self, AppError> {
        let limit = match self.limit {
            None | Some(0) => DEFAULT_MESSAGE_LIMIT,
            Some(limit) => limit,
        };
        let request = Self { limit: Some(limit) };
        request.validate().map_err(validation_error)?;
        Ok(request)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_MESSAGE_LIMIT)
    }
}
