//! Yard Entity
//!
//! A parking yard operated by one branch, split into zones.

use chrono::{DateTime, Utc};
use kernel::id::YardId;

use crate::domain::entity::zone::ZoneLayout;
use crate::domain::value_object::{capacity::Capacity, label::Label};

/// Fields supplied on create and replaced on update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YardDetails {
    pub name: Label,
    pub location: Label,
    pub max_capacity: Capacity,
}

#[derive(Debug, Clone)]
pub struct Yard {
    pub yard_id: YardId,
    pub details: YardDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Yard {
    pub fn new(details: YardDetails) -> Self {
        let now = Utc::now();
        Self {
            yard_id: YardId::new(),
            details,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, details: YardDetails) {
        self.details = details;
        self.updated_at = Utc::now();
    }
}

/// A yard with its zones and their gateways
#[derive(Debug, Clone)]
pub struct YardLayout {
    pub yard: Yard,
    pub zones: Vec<ZoneLayout>,
}
