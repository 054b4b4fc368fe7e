use kernel::error::app_error::{AppError, AppResult};

/// One-based page request, already checked against the configured bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u32,
    size: u32,
}

impl Page {
    /// Missing values fall back to page 1 and `default_size`
    pub fn new(
        number: Option<u32>,
        size: Option<u32>,
        default_size: u32,
        max_size: u32,
    ) -> AppResult<Self> {
        let number = number.unwrap_or(1);
        let size = size.unwrap_or(default_size);

        if number == 0 {
            return Err(AppError::bad_request("page must be at least 1"));
        }

        if size == 0 || size > max_size {
            return Err(AppError::bad_request(format!(
                "pageSize must be between 1 and {}",
                max_size
            )));
        }

        Ok(Self { number, size })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.number - 1) * i64::from(self.size)
    }
}
