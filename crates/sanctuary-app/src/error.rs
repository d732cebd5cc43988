use salvo::http::StatusCode;
use sanctuary_service::error::ServiceError;
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    EventError(#[from] sanctuary_events::error::EventError),

    #[error(transparent)]
    CoreError(#[from] sanctuary_core::error::CoreError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AppError {
    /// ## Summary
    /// HTTP status reported to the client for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::ServiceError(ServiceError::Conflict(_)) => StatusCode::CONFLICT,
            Self::ServiceError(ServiceError::EventError(_))
            | Self::EventError(_)
            | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::CoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// ## Summary
    /// Message safe to show the client; server faults are reported generically.
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
