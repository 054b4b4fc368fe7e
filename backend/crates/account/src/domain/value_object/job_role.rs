use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum JobRole {
    #[default]
    #[display("operator")]
    Operator = 0,
    #[display("mechanic")]
    Mechanic = 1,
    #[display("supervisor")]
    Supervisor = 2,
    #[display("manager")]
    Manager = 3,
    #[display("administrator")]
    Administrator = 4,
}

impl JobRole {
    pub const ALL: [JobRole; 5] = [
        JobRole::Operator,
        JobRole::Mechanic,
        JobRole::Supervisor,
        JobRole::Manager,
        JobRole::Administrator,
    ];

    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use JobRole::*;
        match self {
            Operator => "operator",
            Mechanic => "mechanic",
            Supervisor => "supervisor",
            Manager => "manager",
            Administrator => "administrator",
        }
    }

    /// Database id; `None` for values this build does not know
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.id() == id)
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.code() == code)
    }
}

impl FromStr for JobRole {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::from_code(&s.trim().to_lowercase()).ok_or_else(|| {
            AppError::bad_request(format!("Unknown job role: {}", s.trim())).with_action(
                "Use one of: operator, mechanic, supervisor, manager, administrator",
            )
        })
    }
}
