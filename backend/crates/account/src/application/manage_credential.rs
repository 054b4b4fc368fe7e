//! Credential Management Use Case
//!
//! Administrative operations on login credentials: lookup, password change,
//! unlock and removal.

use std::sync::Arc;

use kernel::id::CredentialId;

use crate::application::config::AccountConfig;
use crate::application::hashing;
use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::{cpf::Cpf, password::RawPassword};
use crate::error::{AccountError, AccountResult};

pub struct CredentialUseCase<C>
where
    C: CredentialRepository,
{
    credential_repo: Arc<C>,
    config: Arc<AccountConfig>,
}

impl<C> CredentialUseCase<C>
where
    C: CredentialRepository,
{
    pub fn new(credential_repo: Arc<C>, config: Arc<AccountConfig>) -> Self {
        Self {
            credential_repo,
            config,
        }
    }

    pub async fn list(&self) -> AccountResult<Vec<Credential>> {
        self.credential_repo.list().await
    }

    pub async fn get(&self, credential_id: &CredentialId) -> AccountResult<Credential> {
        self.credential_repo
            .find_by_id(credential_id)
            .await?
            .ok_or(AccountError::CredentialNotFound)
    }

    /// Unlike the login route, a malformed CPF is reported as such
    pub async fn get_by_cpf(&self, cpf: &str) -> AccountResult<Credential> {
        let cpf = Cpf::new(cpf)?;

        self.credential_repo
            .find_by_cpf(&cpf)
            .await?
            .ok_or(AccountError::CredentialNotFound)
    }

    /// New hash with a fresh salt; the failed-attempt counter is untouched
    pub async fn change_password(
        &self,
        credential_id: &CredentialId,
        new_password: String,
    ) -> AccountResult<()> {
        let raw_password = RawPassword::new(new_password)?;

        let credential = self.get(credential_id).await?;
        let password_hash = hashing::hash_password(raw_password, self.config.clone()).await?;
        let credential = credential.with_password(password_hash);

        if !self
            .credential_repo
            .update_password_hash(&credential.credential_id, &credential.password_hash)
            .await?
        {
            return Err(AccountError::CredentialNotFound);
        }

        tracing::info!(
            credential_id = %credential.credential_id,
            failed_attempts = credential.failed_attempts,
            "Password changed"
        );

        Ok(())
    }

    pub async fn unlock(&self, credential_id: &CredentialId) -> AccountResult<()> {
        if !self.credential_repo.reset_attempts(credential_id).await? {
            return Err(AccountError::CredentialNotFound);
        }

        tracing::info!(credential_id = %credential_id, "Credential unlocked");

        Ok(())
    }

    pub async fn delete(&self, credential_id: &CredentialId) -> AccountResult<()> {
        if !self.credential_repo.delete(credential_id).await? {
            return Err(AccountError::CredentialNotFound);
        }

        tracing::info!(credential_id = %credential_id, "Credential deleted");

        Ok(())
    }
}
