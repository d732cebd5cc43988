use thiserror::Error;

/// Errors raised while validating events or resolving query windows
#[derive(Error, Debug)]
pub enum EventError {
    #[error("Validation error: {field}: {reason}")]
    ValidationError { field: &'static str, reason: String },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(&'static str),
}

impl EventError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field,
            reason: reason.into(),
        }
    }
}

pub type EventResult<T> = std::result::Result<T, EventError>;
