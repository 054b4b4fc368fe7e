//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    credential::{Attempt, Credential, CredentialState, Transition},
    user::{User, UserProfile},
};
pub use repository::{CredentialRepository, UserRepository};
