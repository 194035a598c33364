//! Validation Utilities

use serde::{Deserialize, Deserializer};
use validator::ValidationErrors;

use super::error::AppError;

/// Convert validation errors to AppError
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let detail = e.message.clone().map(|m| m.to_string()).unwrap_or_default();
                format!("{}: {}", field, detail)
            })
        })
        .next()
        .unwrap_or_else(|| "Validation failed".into());

    AppError::Validation(message)
}

/// Trims surrounding whitespace and rejects the value if nothing is left.
pub fn required_trimmed(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{}: is required", field)));
    }
    Ok(trimmed.to_owned())
}

/// Deserializes an optional string field, reading `null` as `""` so it
/// fails the same "is required" check as a missing field.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
