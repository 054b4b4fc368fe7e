//! Value Objects

pub mod capacity;
pub mod gateway_identifier;
pub mod gateway_kind;
pub mod label;
pub mod page;
