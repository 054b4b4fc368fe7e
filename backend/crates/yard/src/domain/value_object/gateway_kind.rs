use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What a gateway watches for
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum GatewayKind {
    #[display("entrance")]
    Entrance = 0,
    #[display("exit")]
    Exit = 1,
    #[display("monitoring")]
    Monitoring = 2,
}

impl GatewayKind {
    pub const ALL: [GatewayKind; 3] = [
        GatewayKind::Entrance,
        GatewayKind::Exit,
        GatewayKind::Monitoring,
    ];

    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            GatewayKind::Entrance => "entrance",
            GatewayKind::Exit => "exit",
            GatewayKind::Monitoring => "monitoring",
        }
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl FromStr for GatewayKind {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let code = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| {
                AppError::bad_request(format!("Unknown gateway kind: {}", s.trim()))
                    .with_action("Use one of: entrance, exit, monitoring")
            })
    }
}
