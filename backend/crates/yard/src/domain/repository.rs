//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Update and delete return false when the row does not exist.

use kernel::id::{GatewayId, YardId, ZoneId};

use crate::domain::entity::{gateway::Gateway, yard::Yard, zone::Zone};
use crate::domain::value_object::page::Page;
use crate::error::YardResult;

#[trait_variant::make(YardRepository: Send)]
pub trait LocalYardRepository {
    async fn create_yard(&self, yard: &Yard) -> YardResult<()>;

    async fn find_yard(&self, yard_id: &YardId) -> YardResult<Option<Yard>>;

    /// One page, oldest first
    async fn list_yards(&self, page: Page) -> YardResult<Vec<Yard>>;

    async fn count_yards(&self) -> YardResult<u64>;

    async fn update_yard(&self, yard: &Yard) -> YardResult<bool>;

    /// Zones and their gateways cascade
    async fn delete_yard(&self, yard_id: &YardId) -> YardResult<bool>;
}

#[trait_variant::make(ZoneRepository: Send)]
pub trait LocalZoneRepository {
    /// Fails with `YardError::YardNotFound` if the yard is gone
    async fn create_zone(&self, zone: &Zone) -> YardResult<()>;

    async fn find_zone(&self, zone_id: &ZoneId) -> YardResult<Option<Zone>>;

    /// All zones, or only those of `yard_id`; oldest first
    async fn list_zones(&self, yard_id: Option<&YardId>) -> YardResult<Vec<Zone>>;

    async fn update_zone(&self, zone: &Zone) -> YardResult<bool>;

    /// Gateways cascade
    async fn delete_zone(&self, zone_id: &ZoneId) -> YardResult<bool>;
}

#[trait_variant::make(GatewayRepository: Send)]
pub trait LocalGatewayRepository {
    /// Fails with `YardError::DuplicateGatewayIdentifier` or
    /// `YardError::ZoneNotFound`
    async fn create_gateway(&self, gateway: &Gateway) -> YardResult<()>;

    async fn find_gateway(&self, gateway_id: &GatewayId) -> YardResult<Option<Gateway>>;

    /// All gateways, or only those of `zone_id`; oldest first
    async fn list_gateways(&self, zone_id: Option<&ZoneId>) -> YardResult<Vec<Gateway>>;

    /// Every gateway in any zone of the yard
    async fn list_gateways_in_yard(&self, yard_id: &YardId) -> YardResult<Vec<Gateway>>;

    async fn update_gateway(&self, gateway: &Gateway) -> YardResult<bool>;

    async fn delete_gateway(&self, gateway_id: &GatewayId) -> YardResult<bool>;
}
