//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::YardPage;
use crate::domain::entity::{
    gateway::Gateway,
    yard::{Yard, YardLayout},
    zone::{Zone, ZoneLayout},
};
use crate::domain::value_object::gateway_kind::GatewayKind;

// ============================================================================
// Yards
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YardRequest {
    pub name: String,
    pub location: String,
    pub max_capacity: i64,
}

/// `?page=2&pageSize=20`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YardResponse {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub max_capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Yard> for YardResponse {
    fn from(yard: &Yard) -> Self {
        Self {
            id: yard.yard_id.into_uuid(),
            name: yard.details.name.as_str().to_string(),
            location: yard.details.location.as_str().to_string(),
            max_capacity: yard.details.max_capacity.get(),
            created_at: yard.created_at,
            updated_at: yard.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YardPageResponse {
    pub items: Vec<YardResponse>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl From<&YardPage> for YardPageResponse {
    fn from(page: &YardPage) -> Self {
        Self {
            items: page.items.iter().map(YardResponse::from).collect(),
            page: page.page.number(),
            page_size: page.page.size(),
            total: page.total,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YardLayoutResponse {
    #[serde(flatten)]
    pub yard: YardResponse,
    pub zones: Vec<ZoneLayoutResponse>,
}

impl From<&YardLayout> for YardLayoutResponse {
    fn from(layout: &YardLayout) -> Self {
        Self {
            yard: YardResponse::from(&layout.yard),
            zones: layout.zones.iter().map(ZoneLayoutResponse::from).collect(),
        }
    }
}

// ============================================================================
// Zones
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRequest {
    pub name: String,
    pub yard_id: Uuid,
}

/// `?yardId=...`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneFilter {
    pub yard_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneResponse {
    pub id: Uuid,
    pub yard_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Zone> for ZoneResponse {
    fn from(zone: &Zone) -> Self {
        Self {
            id: zone.zone_id.into_uuid(),
            yard_id: zone.details.yard_id.into_uuid(),
            name: zone.details.name.as_str().to_string(),
            created_at: zone.created_at,
            updated_at: zone.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneLayoutResponse {
    #[serde(flatten)]
    pub zone: ZoneResponse,
    pub gateways: Vec<GatewayResponse>,
}

impl From<&ZoneLayout> for ZoneLayoutResponse {
    fn from(layout: &ZoneLayout) -> Self {
        Self {
            zone: ZoneResponse::from(&layout.zone),
            gateways: layout.gateways.iter().map(GatewayResponse::from).collect(),
        }
    }
}

// ============================================================================
// Gateways
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    pub identifier: String,
    pub kind: String,
    /// Defaults to active
    #[serde(default = "default_active")]
    pub active: bool,
    pub zone_id: Uuid,
}

fn default_active() -> bool {
    true
}

/// `?zoneId=...`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayFilter {
    pub zone_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub id: Uuid,
    pub zone_id: Uuid,
    pub identifier: String,
    pub kind: GatewayKind,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Gateway> for GatewayResponse {
    fn from(gateway: &Gateway) -> Self {
        Self {
            id: gateway.gateway_id.into_uuid(),
            zone_id: gateway.details.zone_id.into_uuid(),
            identifier: gateway.details.identifier.as_str().to_string(),
            kind: gateway.details.kind,
            active: gateway.details.active,
            created_at: gateway.created_at,
            updated_at: gateway.updated_at,
        }
    }
}
