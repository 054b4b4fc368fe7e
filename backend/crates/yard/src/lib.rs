//! Yard Backend Module
//!
//! Registry of the physical layout the employees operate on: yards, the
//! zones inside them and the gateways that watch each zone.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Deleting a yard removes its zones; deleting a zone removes its gateways.
//! Gateway identifiers are unique across all yards.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::YardConfig;
pub use error::{YardError, YardResult};
pub use infra::postgres::PgYardRepository;
pub use presentation::router::yard_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
