//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    gateway::{Gateway, GatewayDetails},
    yard::{Yard, YardDetails, YardLayout},
    zone::{Zone, ZoneDetails, ZoneLayout},
};
pub use repository::{GatewayRepository, YardRepository, ZoneRepository};
