//! Gateway Identifier Value Object
//!
//! Label printed on the device, e.g. `GW-NORTE-01`. Unique across all yards.

use kernel::error::app_error::{AppError, AppResult};

pub const IDENTIFIER_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GatewayIdentifier(String);

impl GatewayIdentifier {
    /// ASCII letters, digits and `-_.:`, case preserved
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(AppError::bad_request("Gateway identifier cannot be empty"));
        }

        if trimmed.len() > IDENTIFIER_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Gateway identifier must be at most {} characters",
                IDENTIFIER_MAX_LENGTH
            )));
        }

        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
        {
            return Err(AppError::bad_request("Gateway identifier contains invalid characters")
                .with_action("Use letters, digits, '-', '_', '.' or ':'"));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GatewayIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_valid() {
        let id = GatewayIdentifier::new(" GW-Norte_01 ").unwrap();
        assert_eq!(id.as_str(), "GW-Norte_01");
        assert!(GatewayIdentifier::new("aa:bb:cc:dd:ee:ff").is_ok());
    }

    #[test]
    fn test_identifier_invalid() {
        assert!(GatewayIdentifier::new("").is_err());
        assert!(GatewayIdentifier::new("GW 01").is_err());
        assert!(GatewayIdentifier::new("portão-1").is_err());
        assert!(GatewayIdentifier::new("x".repeat(IDENTIFIER_MAX_LENGTH + 1)).is_err());
    }
}
