//! Gateway Use Cases

use std::sync::Arc;

use kernel::id::{GatewayId, ZoneId};

use crate::domain::entity::gateway::{Gateway, GatewayDetails};
use crate::domain::repository::{GatewayRepository, ZoneRepository};
use crate::domain::value_object::{
    gateway_identifier::GatewayIdentifier, gateway_kind::GatewayKind,
};
use crate::error::{YardError, YardResult};

pub struct GatewayInput {
    pub identifier: String,
    pub kind: String,
    pub active: bool,
    pub zone_id: ZoneId,
}

pub struct GatewayUseCase<R>
where
    R: ZoneRepository + GatewayRepository,
{
    repo: Arc<R>,
}

impl<R> GatewayUseCase<R>
where
    R: ZoneRepository + GatewayRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    async fn parse(&self, input: GatewayInput) -> YardResult<GatewayDetails> {
        let identifier = GatewayIdentifier::new(&input.identifier)?;
        let kind = input.kind.parse::<GatewayKind>()?;
        self.require_zone(&input.zone_id).await?;

        Ok(GatewayDetails {
            identifier,
            kind,
            active: input.active,
            zone_id: input.zone_id,
        })
    }

    async fn require_zone(&self, zone_id: &ZoneId) -> YardResult<()> {
        match self.repo.find_zone(zone_id).await? {
            Some(_) => Ok(()),
            None => Err(YardError::ZoneNotFound),
        }
    }

    /// Identifier uniqueness is enforced by the store
    pub async fn create(&self, input: GatewayInput) -> YardResult<Gateway> {
        let gateway = Gateway::new(self.parse(input).await?);

        self.repo.create_gateway(&gateway).await?;

        tracing::info!(
            gateway_id = %gateway.gateway_id,
            identifier = %gateway.details.identifier,
            zone_id = %gateway.details.zone_id,
            kind = %gateway.details.kind,
            "Gateway registered"
        );

        Ok(gateway)
    }

    pub async fn list(&self, zone_id: Option<&ZoneId>) -> YardResult<Vec<Gateway>> {
        if let Some(zone_id) = zone_id {
            self.require_zone(zone_id).await?;
        }

        self.repo.list_gateways(zone_id).await
    }

    pub async fn get(&self, gateway_id: &GatewayId) -> YardResult<Gateway> {
        self.repo
            .find_gateway(gateway_id)
            .await?
            .ok_or(YardError::GatewayNotFound)
    }

    pub async fn update(&self, gateway_id: &GatewayId, input: GatewayInput) -> YardResult<Gateway> {
        let mut gateway = self.get(gateway_id).await?;
        gateway.update(self.parse(input).await?);

        if !self.repo.update_gateway(&gateway).await? {
            return Err(YardError::GatewayNotFound);
        }

        tracing::info!(
            gateway_id = %gateway.gateway_id,
            active = gateway.details.active,
            "Gateway updated"
        );

        Ok(gateway)
    }

    pub async fn delete(&self, gateway_id: &GatewayId) -> YardResult<()> {
        if !self.repo.delete_gateway(gateway_id).await? {
            return Err(YardError::GatewayNotFound);
        }

        tracing::info!(gateway_id = %gateway_id, "Gateway deleted");

        Ok(())
    }
}
