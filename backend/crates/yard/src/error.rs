//! Yard Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type YardResult<T> = Result<T, YardError>;

#[derive(Debug, Error)]
pub enum YardError {
    #[error("Yard not found")]
    YardNotFound,

    #[error("Zone not found")]
    ZoneNotFound,

    #[error("Gateway not found")]
    GatewayNotFound,

    #[error("Gateway identifier already in use")]
    DuplicateGatewayIdentifier,

    /// Value object validation failure (carries its own status and hint)
    #[error("{0}")]
    Validation(AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl YardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            YardError::YardNotFound | YardError::ZoneNotFound | YardError::GatewayNotFound => {
                StatusCode::NOT_FOUND
            }
            YardError::DuplicateGatewayIdentifier => StatusCode::CONFLICT,
            YardError::Validation(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST)
            }
            YardError::Database(_) | YardError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            YardError::YardNotFound | YardError::ZoneNotFound | YardError::GatewayNotFound => {
                ErrorKind::NotFound
            }
            YardError::DuplicateGatewayIdentifier => ErrorKind::Conflict,
            YardError::Validation(err) => err.kind(),
            YardError::Database(_) | YardError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            YardError::Validation(err) => {
                let app_err = AppError::new(err.kind(), err.message().to_string());
                match err.action() {
                    Some(action) => app_err.with_action(action.to_string()),
                    None => app_err,
                }
            }
            YardError::Database(_) | YardError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            YardError::DuplicateGatewayIdentifier => AppError::conflict(self.to_string())
                .with_action("Choose a different gateway identifier"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            YardError::Database(e) => {
                tracing::error!(error = %e, "Yard database error");
            }
            YardError::Internal(msg) => {
                tracing::error!(message = %msg, "Yard internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Yard error");
            }
        }
    }
}

impl IntoResponse for YardError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for YardError {
    fn from(err: AppError) -> Self {
        if err.is_server_error() {
            YardError::Internal(err.to_string())
        } else {
            YardError::Validation(err)
        }
    }
}
