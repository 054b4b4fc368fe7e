//! Account Error Types
//!
//! Account-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("User not found")]
    UserNotFound,

    #[error("Login not found")]
    CredentialNotFound,

    /// CPF already registered to another user
    #[error("CPF already registered")]
    DuplicateCpf,

    /// CPF is the login key and cannot change after registration
    #[error("CPF cannot be changed")]
    CpfImmutable,

    #[error("Employee must be at least {minimum} years old")]
    Underage { minimum: u32 },

    /// Wrong password or unknown CPF on the login route
    #[error("Invalid CPF or password")]
    InvalidCredentials,

    #[error("Account blocked after too many failed login attempts")]
    AccountBlocked,

    /// Value object validation failure (carries its own status and hint)
    #[error("{0}")]
    Validation(AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::UserNotFound | AccountError::CredentialNotFound => StatusCode::NOT_FOUND,
            AccountError::DuplicateCpf => StatusCode::CONFLICT,
            AccountError::CpfImmutable => StatusCode::BAD_REQUEST,
            AccountError::Underage { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AccountError::AccountBlocked => StatusCode::FORBIDDEN,
            AccountError::Validation(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST)
            }
            AccountError::Database(_) | AccountError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::UserNotFound | AccountError::CredentialNotFound => ErrorKind::NotFound,
            AccountError::DuplicateCpf => ErrorKind::Conflict,
            AccountError::CpfImmutable => ErrorKind::BadRequest,
            AccountError::Underage { .. } => ErrorKind::UnprocessableEntity,
            AccountError::InvalidCredentials => ErrorKind::Unauthorized,
            AccountError::AccountBlocked => ErrorKind::Forbidden,
            AccountError::Validation(err) => err.kind(),
            AccountError::Database(_) | AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Storage and internal details stay in the logs; clients get a generic
    /// message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AccountError::Validation(err) => {
                let app_err = AppError::new(err.kind(), err.message().to_string());
                match err.action() {
                    Some(action) => app_err.with_action(action.to_string()),
                    None => app_err,
                }
            }
            AccountError::Database(_) | AccountError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            AccountError::AccountBlocked => AppError::forbidden(self.to_string())
                .with_action("Ask an administrator to unlock the account"),
            AccountError::Underage { .. } => AppError::unprocessable(self.to_string())
                .with_action("Check the birth date"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Rejected login attempt");
            }
            AccountError::AccountBlocked => {
                tracing::warn!("Login attempt on blocked account");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        if err.is_server_error() {
            AccountError::Internal(err.to_string())
        } else {
            AccountError::Validation(err)
        }
    }
}

impl From<tokio::task::JoinError> for AccountError {
    fn from(err: tokio::task::JoinError) -> Self {
        AccountError::Internal(format!("Password task failed: {}", err))
    }
}
