//! Label Value Object
//!
//! Free text naming a yard, its location or a zone.

use kernel::error::app_error::{AppError, AppResult};
use unicode_normalization::UnicodeNormalization;

pub const LABEL_MAX_LENGTH: usize = 120;

/// Trimmed, NFC-normalized text of 1..=120 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    /// `field` names the input in error messages
    pub fn new(raw: impl AsRef<str>, field: &'static str) -> AppResult<Self> {
        let normalized: String = raw.as_ref().trim().nfc().collect();

        if normalized.is_empty() {
            return Err(AppError::bad_request(format!("{} cannot be empty", field)));
        }

        let char_count = normalized.chars().count();
        if char_count > LABEL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "{} must be at most {} characters (got {})",
                field, LABEL_MAX_LENGTH, char_count
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

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_trims_and_normalizes() {
        let label = Label::new("  P\u{00E1}tio Norte ", "Name").unwrap();
        assert_eq!(label.as_str(), "P\u{00E1}tio Norte");
        assert_eq!(label, Label::new("Pa\u{0301}tio Norte", "Name").unwrap());
    }

    #[test]
    fn test_label_limits() {
        assert_eq!(
            Label::new(" ", "Location").unwrap_err().message(),
            "Location cannot be empty"
        );
        assert!(Label::new("z".repeat(LABEL_MAX_LENGTH), "Name").is_ok());
        assert!(Label::new("z".repeat(LABEL_MAX_LENGTH + 1), "Name").is_err());
        assert!(Label::new("Zona\u{0007}", "Name").is_err());
    }
}
