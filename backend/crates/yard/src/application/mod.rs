//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod manage_gateway;
pub mod manage_yard;
pub mod manage_zone;

// Re-exports
pub use config::YardConfig;
pub use manage_gateway::{GatewayInput, GatewayUseCase};
pub use manage_yard::{YardInput, YardPage, YardUseCase};
pub use manage_zone::{ZoneInput, ZoneUseCase};
