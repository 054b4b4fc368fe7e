//! Birth Date Value Object
//!
//! Employees must be adults on the day they are registered or updated.
//! "Today" is always passed in so the rule is deterministic under test.

use chrono::{Datelike, NaiveDate};

use crate::error::{AccountError, AccountResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Accept `date` only if the person is at least `minimum_age` on `today`
    pub fn new(date: NaiveDate, today: NaiveDate, minimum_age: u32) -> AccountResult<Self> {
        let birth_date = Self(date);

        if birth_date.age_on(today) < minimum_age {
            return Err(AccountError::Underage {
                minimum: minimum_age,
            });
        }

        Ok(birth_date)
    }

    pub fn from_db(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Completed years on `today` (0 for dates in the future)
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let Some(mut years) = today.year().checked_sub(self.0.year()) else {
            return 0;
        };

        // Birthday not reached yet this year
        if (today.month(), today.day()) < (self.0.month(), self.0.day()) {
            years -= 1;
        }

        u32::try_from(years).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_on_birthday_boundary() {
        let born = BirthDate::from_db(date(2000, 6, 15));
        assert_eq!(born.age_on(date(2018, 6, 14)), 17);
        assert_eq!(born.age_on(date(2018, 6, 15)), 18);
        assert_eq!(born.age_on(date(2018, 6, 16)), 18);
    }

    #[test]
    fn test_age_future_date_is_zero() {
        let born = BirthDate::from_db(date(2030, 1, 1));
        assert_eq!(born.age_on(date(2026, 1, 1)), 0);
    }

    #[test]
    fn test_leap_day_birth() {
        let born = BirthDate::from_db(date(2004, 2, 29));
        assert_eq!(born.age_on(date(2022, 2, 28)), 17);
        assert_eq!(born.age_on(date(2022, 3, 1)), 18);
    }

    #[test]
    fn test_minimum_age_enforced() {
        let today = date(2026, 10, 19);
        assert!(BirthDate::new(date(2008, 10, 19), today, 18).is_ok());
        assert!(matches!(
            BirthDate::new(date(2008, 10, 20), today, 18),
            Err(AccountError::Underage { minimum: 18 })
        ));
    }
}
