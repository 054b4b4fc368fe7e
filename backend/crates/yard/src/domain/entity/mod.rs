//! Domain Entities

pub mod gateway;
pub mod yard;
pub mod zone;
