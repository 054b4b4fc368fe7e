use kernel::error::app_error::{AppError, AppResult};

/// Maximum number of vehicles a yard holds; always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Capacity(i32);

impl Capacity {
    pub fn new(value: i64) -> AppResult<Self> {
        if value <= 0 {
            return Err(AppError::bad_request("Maximum capacity must be greater than zero"));
        }

        i32::try_from(value).map(Self).map_err(|_| {
            AppError::bad_request(format!("Maximum capacity must be at most {}", i32::MAX))
        })
    }

    pub fn from_db(value: i32) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_bounds() {
        assert_eq!(Capacity::new(1).unwrap().get(), 1);
        assert_eq!(Capacity::new(350).unwrap().get(), 350);
        assert!(Capacity::new(0).is_err());
        assert!(Capacity::new(-4).is_err());
        assert!(Capacity::new(i64::from(i32::MAX) + 1).is_err());
    }
}
