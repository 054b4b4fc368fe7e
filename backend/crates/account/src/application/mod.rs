//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
mod hashing;
pub mod manage_credential;
pub mod manage_user;
pub mod register_user;

// Re-exports
pub use authenticate::{AuthOutcome, AuthenticateInput, AuthenticateUseCase};
pub use config::AccountConfig;
pub use manage_credential::CredentialUseCase;
pub use manage_user::{DeleteUserUseCase, UpdateUserInput, UpdateUserUseCase, UserQueryUseCase};
pub use register_user::{RegisterUserInput, RegisterUserUseCase};
