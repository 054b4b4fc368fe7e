//! Account Backend Module
//!
//! Employee registration and the login gate of the yard management API.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Login gate
//! Every employee has exactly one login credential, looked up by CPF.
//! Five consecutive wrong passwords block the credential; a blocked
//! credential rejects every attempt without looking at the password until an
//! administrator unlocks it. Counter updates are persisted with a
//! compare-and-swap so that concurrent attempts never lose an increment.
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, fresh salt per hash, optional pepper
//! - Hash verification runs on the blocking thread pool
//! - Unknown CPF and wrong password are indistinguishable on the login route
//! - CPFs are masked in logs

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::postgres::PgAccountRepository;
pub use presentation::router::account_router;

pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
