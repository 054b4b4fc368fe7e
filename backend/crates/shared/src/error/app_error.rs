//! Application Error
//!
//! [`AppError`] is what value objects return on invalid input and what the
//! domain error enums render through. It carries a kind (HTTP status), a
//! message safe to show to clients and an optional hint telling the client
//! what to do next.

use std::borrow::Cow;
use std::fmt;

use super::kind::ErrorKind;

/// Unified application error
///
/// ```
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::bad_request("CPF must have 11 digits")
///     .with_action("Check the document number");
/// assert_eq!(err.kind(), ErrorKind::BadRequest);
/// assert_eq!(err.action(), Some("Check the document number"));
/// ```
#[derive(Debug, Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
        }
    }

    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn forbidden(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    pub fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn unprocessable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::UnprocessableEntity, message)
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// Attach a hint for the client
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// 5xx errors are folded into the domain's internal variant
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(action) = &self.action {
            write!(f, " (Action: {action})")?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::NotFound, "Login not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Login not found");
        assert!(err.action().is_none());
    }

    #[test]
    fn test_constructors_map_to_status() {
        let cases = [
            (AppError::bad_request("x"), 400),
            (AppError::forbidden("x"), 403),
            (AppError::conflict("x"), 409),
            (AppError::unprocessable("x"), 422),
            (AppError::internal("x"), 500),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code(), status, "{err}");
        }
        assert!(AppError::internal("x").is_server_error());
        assert!(!AppError::conflict("x").is_server_error());
    }

    #[test]
    fn test_display() {
        let err = AppError::forbidden("Account blocked");
        assert_eq!(err.to_string(), "[Forbidden] Account blocked");

        let err = AppError::bad_request("Invalid CPF").with_action("Check the digits");
        assert!(err.to_string().contains("Action: Check the digits"));
    }
}
