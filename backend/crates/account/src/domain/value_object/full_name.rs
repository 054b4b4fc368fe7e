//! Full Name Value Object
//!
//! Free text used for an employee's name and for the branch they work at.

use kernel::error::app_error::{AppError, AppResult};
use unicode_normalization::UnicodeNormalization;

pub const FULL_NAME_MAX_LENGTH: usize = 120;

/// Trimmed, NFC-normalized text of 1..=120 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName(String);

impl FullName {
    /// Validate an employee name
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        Self::labelled(raw, "Name")
    }

    /// Validate any free-text field; `field` names it in error messages
    pub fn labelled(raw: impl AsRef<str>, field: &'static str) -> AppResult<Self> {
        // NFC so "José" typed with a combining accent compares equal
        let normalized: String = raw.as_ref().trim().nfc().collect();

        if normalized.is_empty() {
            return Err(AppError::bad_request(format!("{} cannot be empty", field)));
        }

        let char_count = normalized.chars().count();
        if char_count > FULL_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "{} must be at most {} characters (got {})",
                field, FULL_NAME_MAX_LENGTH, char_count
            )));
        }

        if normalized.chars().any(char::is_control) {
            return Err(AppError::bad_request(format!(
                "{} contains invalid characters",
                field
            )));
        }

        Ok(Self(normalized))
    }

    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
