use chrono::{DateTime, Utc};
use kernel::id::{YardId, ZoneId};

use crate::domain::entity::gateway::Gateway;
use crate::domain::value_object::label::Label;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneDetails {
    pub name: Label,
    /// Owning yard; a zone may be moved to another yard
    pub yard_id: YardId,
}

#[derive(Debug, Clone)]
pub struct Zone {
    pub zone_id: ZoneId,
    pub details: ZoneDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Zone {
    pub fn new(details: ZoneDetails) -> Self {
        let now = Utc::now();
        Self {
            zone_id: ZoneId::new(),
            details,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, details: ZoneDetails) {
        self.details = details;
        self.updated_at = Utc::now();
    }
}

/// A zone with its gateways
#[derive(Debug, Clone)]
pub struct ZoneLayout {
    pub zone: Zone,
    pub gateways: Vec<Gateway>,
}

impl ZoneLayout {
    /// Group gateways under their zones, keeping the zone order
    ///
    /// Gateways whose zone is not in `zones` are dropped.
    pub fn assemble(zones: Vec<Zone>, gateways: Vec<Gateway>) -> Vec<ZoneLayout> {
        let mut layouts: Vec<ZoneLayout> = zones
            .into_iter()
            .map(|zone| ZoneLayout {
                zone,
                gateways: Vec::new(),
            })
            .collect();

        for gateway in gateways {
            if let Some(layout) = layouts
                .iter_mut()
                .find(|l| l.zone.zone_id == gateway.details.zone_id)
            {
                layout.gateways.push(gateway);
            }
        }

        layouts
    }
}
