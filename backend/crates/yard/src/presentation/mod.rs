//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::YardAppState;
pub use router::{yard_router, yard_router_generic};
