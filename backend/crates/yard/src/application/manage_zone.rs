//! Zone Use Cases

use std::sync::Arc;

use kernel::id::{YardId, ZoneId};

use crate::domain::entity::zone::{Zone, ZoneDetails, ZoneLayout};
use crate::domain::repository::{GatewayRepository, YardRepository, ZoneRepository};
use crate::domain::value_object::label::Label;
use crate::error::{YardError, YardResult};

pub struct ZoneInput {
    pub name: String,
    pub yard_id: YardId,
}

pub struct ZoneUseCase<R>
where
    R: YardRepository + ZoneRepository + GatewayRepository,
{
    repo: Arc<R>,
}

impl<R> ZoneUseCase<R>
where
    R: YardRepository + ZoneRepository + GatewayRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate the input and make sure the target yard exists
    async fn parse(&self, input: ZoneInput) -> YardResult<ZoneDetails> {
        let name = Label::new(input.name, "Name")?;
        self.require_yard(&input.yard_id).await?;

        Ok(ZoneDetails {
            name,
            yard_id: input.yard_id,
        })
    }

    async fn require_yard(&self, yard_id: &YardId) -> YardResult<()> {
        match self.repo.find_yard(yard_id).await? {
            Some(_) => Ok(()),
            None => Err(YardError::YardNotFound),
        }
    }

    pub async fn create(&self, input: ZoneInput) -> YardResult<Zone> {
        let zone = Zone::new(self.parse(input).await?);

        self.repo.create_zone(&zone).await?;

        tracing::info!(
            zone_id = %zone.zone_id,
            yard_id = %zone.details.yard_id,
            "Zone created"
        );

        Ok(zone)
    }

    /// A filter naming a missing yard is a 404, not an empty list
    pub async fn list(&self, yard_id: Option<&YardId>) -> YardResult<Vec<Zone>> {
        if let Some(yard_id) = yard_id {
            self.require_yard(yard_id).await?;
        }

        self.repo.list_zones(yard_id).await
    }

    pub async fn get(&self, zone_id: &ZoneId) -> YardResult<Zone> {
        self.repo
            .find_zone(zone_id)
            .await?
            .ok_or(YardError::ZoneNotFound)
    }

    /// The zone with its gateways
    pub async fn layout(&self, zone_id: &ZoneId) -> YardResult<ZoneLayout> {
        let zone = self.get(zone_id).await?;
        let gateways = self.repo.list_gateways(Some(zone_id)).await?;

        Ok(ZoneLayout { zone, gateways })
    }

    pub async fn update(&self, zone_id: &ZoneId, input: ZoneInput) -> YardResult<Zone> {
        let mut zone = self.get(zone_id).await?;
        zone.update(self.parse(input).await?);

        if !self.repo.update_zone(&zone).await? {
            return Err(YardError::ZoneNotFound);
        }

        tracing::info!(zone_id = %zone.zone_id, "Zone updated");

        Ok(zone)
    }

    pub async fn delete(&self, zone_id: &ZoneId) -> YardResult<()> {
        if !self.repo.delete_zone(zone_id).await? {
            return Err(YardError::ZoneNotFound);
        }

        tracing::info!(zone_id = %zone_id, "Zone deleted");

        Ok(())
    }
}
