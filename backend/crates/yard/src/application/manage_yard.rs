//! Yard Use Cases

use std::sync::Arc;

use kernel::id::YardId;

use crate::application::config::YardConfig;
use crate::domain::entity::{
    yard::{Yard, YardDetails, YardLayout},
    zone::ZoneLayout,
};
use crate::domain::repository::{GatewayRepository, YardRepository, ZoneRepository};
use crate::domain::value_object::{capacity::Capacity, label::Label, page::Page};
use crate::error::{YardError, YardResult};

pub struct YardInput {
    pub name: String,
    pub location: String,
    pub max_capacity: i64,
}

impl YardInput {
    fn parse(self) -> YardResult<YardDetails> {
        Ok(YardDetails {
            name: Label::new(self.name, "Name")?,
            location: Label::new(self.location, "Location")?,
            max_capacity: Capacity::new(self.max_capacity)?,
        })
    }
}

/// One page of yards plus the total row count
#[derive(Debug, Clone)]
pub struct YardPage {
    pub items: Vec<Yard>,
    pub page: Page,
    pub total: u64,
}

pub struct YardUseCase<R>
where
    R: YardRepository + ZoneRepository + GatewayRepository,
{
    repo: Arc<R>,
    config: Arc<YardConfig>,
}

impl<R> YardUseCase<R>
where
    R: YardRepository + ZoneRepository + GatewayRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<YardConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn create(&self, input: YardInput) -> YardResult<Yard> {
        let yard = Yard::new(input.parse()?);

        self.repo.create_yard(&yard).await?;

        tracing::info!(
            yard_id = %yard.yard_id,
            name = %yard.details.name,
            "Yard created"
        );

        Ok(yard)
    }

    /// `page` and `page_size` default to 1 and the configured size
    pub async fn list(&self, page: Option<u32>, page_size: Option<u32>) -> YardResult<YardPage> {
        let page = Page::new(
            page,
            page_size,
            self.config.default_page_size,
            self.config.max_page_size,
        )?;

        let items = self.repo.list_yards(page).await?;
        let total = self.repo.count_yards().await?;

        Ok(YardPage { items, page, total })
    }

    pub async fn get(&self, yard_id: &YardId) -> YardResult<Yard> {
        self.repo
            .find_yard(yard_id)
            .await?
            .ok_or(YardError::YardNotFound)
    }

    /// The yard with every zone and gateway under it
    pub async fn layout(&self, yard_id: &YardId) -> YardResult<YardLayout> {
        let yard = self.get(yard_id).await?;
        let zones = self.repo.list_zones(Some(yard_id)).await?;
        let gateways = self.repo.list_gateways_in_yard(yard_id).await?;

        Ok(YardLayout {
            yard,
            zones: ZoneLayout::assemble(zones, gateways),
        })
    }

    pub async fn update(&self, yard_id: &YardId, input: YardInput) -> YardResult<Yard> {
        let details = input.parse()?;

        let mut yard = self.get(yard_id).await?;
        yard.update(details);

        if !self.repo.update_yard(&yard).await? {
            return Err(YardError::YardNotFound);
        }

        tracing::info!(yard_id = %yard.yard_id, "Yard updated");

        Ok(yard)
    }

    pub async fn delete(&self, yard_id: &YardId) -> YardResult<()> {
        if !self.repo.delete_yard(yard_id).await? {
            return Err(YardError::YardNotFound);
        }

        tracing::info!(yard_id = %yard_id, "Yard deleted");

        Ok(())
    }
}
