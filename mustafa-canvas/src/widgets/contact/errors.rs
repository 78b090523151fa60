use thiserror::Error;

use super::model::ContactField;

/// Errors emitted while validating or delivering an inquiry.
#[derive(Debug, Error)]
pub(crate) enum ContactError {
    /// A form field did not pass validation.
    #[error("{}: {message}", .field.label())]
    Validation {
        field: ContactField,
        message: String,
    },
    /// Filesystem operation failed.
    #[error("inquiry outbox IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization or deserialization failed.
    #[error("inquiry outbox JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContactError {
    pub(crate) fn validation(
        field: ContactField,
        message: impl Into<String>,
    ) -> Self {
        ContactError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Field and message of a validation error.
    pub(crate) fn field_message(&self) -> Option<(ContactField, &str)> {
        match self {
            ContactError::Validation { field, message } => {
                Some((*field, message.as_str()))
            },
            _ => None,
        }
    }
}
