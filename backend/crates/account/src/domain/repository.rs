//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{CredentialId, UserId};

use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::value_object::{cpf::Cpf, password::UserPassword};
use crate::error::AccountResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert the user and its credential atomically
    ///
    /// Fails with `AccountError::DuplicateCpf` if the CPF is taken.
    async fn create_with_credential(&self, user: &User, credential: &Credential)
    -> AccountResult<()>;

    async fn find_by_id(&self, user_id: &UserId) -> AccountResult<Option<User>>;

    async fn exists_by_cpf(&self, cpf: &Cpf) -> AccountResult<bool>;

    /// All users, oldest registration first
    async fn list(&self) -> AccountResult<Vec<User>>;

    /// Returns false if the user does not exist
    async fn update(&self, user: &User) -> AccountResult<bool>;

    /// Returns false if the user does not exist; the credential cascades
    async fn delete(&self, user_id: &UserId) -> AccountResult<bool>;
}

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    async fn find_by_id(&self, credential_id: &CredentialId) -> AccountResult<Option<Credential>>;

    async fn find_by_cpf(&self, cpf: &Cpf) -> AccountResult<Option<Credential>>;

    async fn list(&self) -> AccountResult<Vec<Credential>>;

    /// Persist `next.failed_attempts` only if the stored row still holds the
    /// counter and hash of `current`
    ///
    /// Returns false when another writer got there first; the caller reloads.
    async fn compare_and_set_attempts(
        &self,
        current: &Credential,
        next: &Credential,
    ) -> AccountResult<bool>;

    /// Unconditional reset to zero; false if the credential does not exist
    async fn reset_attempts(&self, credential_id: &CredentialId) -> AccountResult<bool>;

    /// Replace the hash, leaving the counter alone; false if not found
    async fn update_password_hash(
        &self,
        credential_id: &CredentialId,
        password_hash: &UserPassword,
    ) -> AccountResult<bool>;

    async fn delete(&self, credential_id: &CredentialId) -> AccountResult<bool>;
}
