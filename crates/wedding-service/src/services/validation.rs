//! Input checks shared by the use cases

use super::error::{ServiceError, ServiceResult};

/// Trimmed value, or a validation error carrying `message` when blank
pub(crate) fn required(value: &str, message: &str) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation(message));
    }
    Ok(trimmed.to_string())
}

/// Like [`required`], for fields that may be left out of a partial update
pub(crate) fn required_if_present(
    value: Option<&str>,
    message: &str,
) -> ServiceResult<Option<String>> {
    value.map(|v| required(v, message)).transpose()
}
