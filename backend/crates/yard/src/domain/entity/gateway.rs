use chrono::{DateTime, Utc};
use kernel::id::{GatewayId, ZoneId};

use crate::domain::value_object::{
    gateway_identifier::GatewayIdentifier, gateway_kind::GatewayKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayDetails {
    pub identifier: GatewayIdentifier,
    pub kind: GatewayKind,
    /// Inactive gateways stay registered but report nothing
    pub active: bool,
    pub zone_id: ZoneId,
}

/// Sensor device installed in a zone
#[derive(Debug, Clone)]
pub struct Gateway {
    pub gateway_id: GatewayId,
    pub details: GatewayDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Gateway {
    pub fn new(details: GatewayDetails) -> Self {
        let now = Utc::now();
        Self {
            gateway_id: GatewayId::new(),
            details,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, details: GatewayDetails) {
        self.details = details;
        self.updated_at = Utc::now();
    }
}
