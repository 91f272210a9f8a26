use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::{ErrorCode, ErrorResponse};
use thiserror::Error;

/// Failure signals produced by the users handlers and service.
///
/// Handlers build these directly and return them; `IntoResponse` below is
/// the one place that decides the HTTP status and error code.
#[derive(Debug, Error)]
pub enum UserError {
    /// Resource absent or the service reported the operation as failed
    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    EmailAlreadyTaken(String),

    /// Password and its confirmation differ
    #[error("{0}")]
    InvalidPassword(String),

    /// Operation failed without a more specific kind
    #[error("{0}")]
    Failed(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn status(&self) -> StatusCode {
        match self {
            UserError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            UserError::EmailAlreadyTaken(_) => StatusCode::CONFLICT,
            UserError::InvalidPassword(_) => StatusCode::FORBIDDEN,
            UserError::Failed(_) | UserError::PasswordHash(_) | UserError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::UnprocessableEntity(_) => ErrorCode::UnprocessableEntity,
            UserError::EmailAlreadyTaken(_) => ErrorCode::EmailAlreadyTaken,
            UserError::InvalidPassword(_) => ErrorCode::InvalidPassword,
            UserError::Failed(_) | UserError::PasswordHash(_) | UserError::Internal(_) => {
                ErrorCode::InternalError
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match &self {
            UserError::PasswordHash(msg) | UserError::Internal(msg) => {
                tracing::error!(error_code = code.code(), "Internal error: {}", msg);
                code.default_message().to_string()
            }
            UserError::Failed(msg) => {
                tracing::error!(error_code = code.code(), "Operation failed: {}", msg);
                msg.clone()
            }
            other => {
                tracing::info!(error_code = code.code(), error = %other, "Request rejected");
                other.to_string()
            }
        };

        ErrorResponse::new(code, message).into_response_with(status)
    }
}
