//! CPF Value Object
//!
//! Brazilian individual taxpayer number, the login key of every employee.
//! Stored as 11 bare digits; the last two are mod-11 check digits.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;
use std::str::FromStr;

const CPF_LENGTH: usize = 11;

/// Validated CPF (digits only)
///
/// ```
/// use account::domain::value_object::cpf::Cpf;
///
/// let cpf = Cpf::new("529.982.247-25").unwrap();
/// assert_eq!(cpf.as_str(), "52998224725");
/// assert_eq!(cpf.formatted(), "529.982.247-25");
/// assert_eq!(cpf.masked(), "***.***.***-25");
/// assert!(Cpf::new("529.982.247-24").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Parse user input; `.`, `-` and spaces are ignored
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let raw = raw.as_ref();
        let mut digits = String::with_capacity(CPF_LENGTH);

        for ch in raw.chars() {
            match ch {
                '0'..='9' => digits.push(ch),
                '.' | '-' | ' ' => {}
                _ => {
                    return Err(AppError::bad_request("CPF may only contain digits")
                        .with_action("Use the format 000.000.000-00 or 11 digits"));
                }
            }
        }

        if digits.len() != CPF_LENGTH {
            return Err(AppError::bad_request(format!(
                "CPF must have {} digits (got {})",
                CPF_LENGTH,
                digits.len()
            ))
            .with_action("Use the format 000.000.000-00 or 11 digits"));
        }

        if !Self::has_valid_check_digits(&digits) {
            return Err(AppError::bad_request("Invalid CPF")
                .with_action("Check the document number"));
        }

        Ok(Self(digits))
    }

    fn has_valid_check_digits(digits: &str) -> bool {
        let values: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

        // 000.000.000-00, 111.111.111-11 ... pass the arithmetic but are not issued
        if values.iter().all(|&d| d == values[0]) {
            return false;
        }

        let first = check_digit(&values[..9]);
        let second = check_digit(&values[..10]);

        values[9] == first && values[10] == second
    }

    /// Trusted value from the database
    pub fn from_db(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `000.000.000-00`
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }

    /// Only the check digits remain visible (for logs and login views)
    pub fn masked(&self) -> String {
        format!("***.***.***-{}", &self.0[9..11])
    }
}

/// Mod-11 check digit over `digits`, weights counting down to 2
fn check_digit(digits: &[u32]) -> u32 {
    let weight_start = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight_start - i as u32))
        .sum();

    match sum % 11 {
        0 | 1 => 0,
        rest => 11 - rest,
    }
}

impl FromStr for Cpf {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Cpf::new(s)
    }
}

// Debug and Display never expose the full number.
impl fmt::Debug for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cpf").field(&self.masked()).finish()
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_valid() {
        assert!(Cpf::new("52998224725").is_ok());
        assert!(Cpf::new("529.982.247-25").is_ok());
        assert!(Cpf::new(" 111.444.777-35 ").is_ok());
    }

    #[test]
    fn test_cpf_normalizes_punctuation() {
        let a = Cpf::new("111.444.777-35").unwrap();
        let b = Cpf::new("11144477735").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "11144477735");
    }

    #[test]
    fn test_cpf_wrong_check_digits() {
        assert!(Cpf::new("52998224735").is_err());
        assert!(Cpf::new("11144477734").is_err());
    }

    #[test]
    fn test_cpf_wrong_length_or_chars() {
        assert!(Cpf::new("").is_err());
        assert!(Cpf::new("5299822472").is_err());
        assert!(Cpf::new("529982247255").is_err());
        assert!(Cpf::new("529x982x247x25").is_err());
    }

    #[test]
    fn test_cpf_repeated_digits_rejected() {
        for d in 0..=9 {
            let raw = d.to_string().repeat(11);
            assert!(Cpf::new(&raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_check_digit_remainder_below_two_is_zero() {
        // 9 nines: sum = 9 * (10+9+...+2) = 486, 486 % 11 = 2 -> 9
        assert_eq!(check_digit(&[9; 9]), 9);
        // sum 0 -> remainder 0 -> digit 0
        assert_eq!(check_digit(&[0; 9]), 0);
    }

    #[test]
    fn test_cpf_formatting_and_masking() {
        let cpf = Cpf::new("11144477735").unwrap();
        assert_eq!(cpf.formatted(), "111.444.777-35");
        assert_eq!(cpf.masked(), "***.***.***-35");
        assert_eq!(cpf.to_string(), "***.***.***-35");
        assert!(!format!("{:?}", cpf).contains("111444"));
    }

    #[test]
    fn test_error_has_action_hint() {
        let err = Cpf::new("123").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.action().is_some());
    }
}
