//! Authenticate Use Case
//!
//! Drives the credential lockout gate for one login attempt: load the
//! credential by CPF, run the attempt, persist the counter with a
//! compare-and-swap, and report the outcome.
//!
//! If the compare-and-swap misses (a concurrent attempt, unlock or password
//! change touched the row), the credential is reloaded and the attempt is
//! evaluated again against the fresh state. The Argon2 result is reused as
//! long as the reloaded hash is the one already checked.
//!
//! Unknown and malformed CPFs still pay for one Argon2 verification, so
//! response time does not reveal which CPFs are registered.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::hashing;
use crate::domain::entity::credential::{Attempt, Credential};
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::{
    cpf::Cpf,
    password::{RawPassword, UserPassword},
};
use crate::error::{AccountError, AccountResult};

pub struct AuthenticateInput {
    pub cpf: String,
    pub password: String,
}

/// What the gate decided
///
/// Expected outcomes, not errors: only storage failures are `Err`.
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    /// Carries the credential as persisted after the attempt
    Authenticated(Credential),
    InvalidCredentials,
    AccountBlocked,
    NotFound,
}

pub struct AuthenticateUseCase<C>
where
    C: CredentialRepository,
{
    credential_repo: Arc<C>,
    config: Arc<AccountConfig>,
}

impl<C> AuthenticateUseCase<C>
where
    C: CredentialRepository,
{
    pub fn new(credential_repo: Arc<C>, config: Arc<AccountConfig>) -> Self {
        Self {
            credential_repo,
            config,
        }
    }

    pub async fn execute(&self, input: AuthenticateInput) -> AccountResult<AuthOutcome> {
        let mut password = RawPassword::submitted(input.password);

        // A malformed CPF cannot have a credential
        let Ok(cpf) = Cpf::new(&input.cpf) else {
            tracing::warn!("Login attempt with malformed CPF");
            return self.not_found(password).await;
        };

        let Some(mut current) = self.credential_repo.find_by_cpf(&cpf).await? else {
            tracing::warn!(cpf = %cpf, "Login attempt for unknown CPF");
            return self.not_found(password).await;
        };

        // Hash already run through Argon2 and whether it matched
        let mut checked: Option<(UserPassword, bool)> = None;

        for round in 0..=self.config.max_cas_retries {
            let known_match = checked
                .as_ref()
                .filter(|(hash, _)| *hash == current.password_hash)
                .map(|(_, matched)| *matched);

            let transition = match known_match {
                Some(matched) => current.settle(matched),
                None => {
                    let (transition, returned) =
                        hashing::verify_attempt(current.clone(), password, self.config.clone())
                            .await?;
                    password = returned;

                    // Blocked credentials skip the hash, so there is nothing to remember
                    if transition.attempt != Attempt::AccountBlocked {
                        checked = Some((
                            current.password_hash.clone(),
                            transition.attempt == Attempt::Authenticated,
                        ));
                    }
                    transition
                }
            };

            let persisted = !transition.changed
                || self
                    .credential_repo
                    .compare_and_set_attempts(&current, &transition.credential)
                    .await?;

            if persisted {
                return Ok(self.report(&cpf, transition.attempt, transition.credential));
            }

            tracing::debug!(
                credential_id = %current.credential_id,
                round,
                "Failed-attempt counter changed concurrently, reloading"
            );

            current = match self
                .credential_repo
                .find_by_id(&current.credential_id)
                .await?
            {
                Some(credential) => credential,
                None => return Ok(AuthOutcome::NotFound),
            };
        }

        Err(AccountError::Internal(format!(
            "Failed-attempt counter still contended after {} retries",
            self.config.max_cas_retries
        )))
    }

    /// Costs the same Argon2 work as a wrong password before answering
    async fn not_found(&self, password: RawPassword) -> AccountResult<AuthOutcome> {
        hashing::verify_placeholder(password, self.config.clone()).await?;
        Ok(AuthOutcome::NotFound)
    }

    fn report(&self, cpf: &Cpf, attempt: Attempt, credential: Credential) -> AuthOutcome {
        match attempt {
            Attempt::Authenticated => {
                tracing::info!(
                    credential_id = %credential.credential_id,
                    user_id = %credential.user_id,
                    "User signed in"
                );
                AuthOutcome::Authenticated(credential)
            }
            Attempt::InvalidCredentials => {
                if credential.is_blocked() {
                    tracing::warn!(
                        cpf = %cpf,
                        credential_id = %credential.credential_id,
                        failed_attempts = credential.failed_attempts,
                        "Account blocked after too many failed attempts"
                    );
                } else {
                    tracing::warn!(
                        cpf = %cpf,
                        failed_attempts = credential.failed_attempts,
                        "Wrong password"
                    );
                }
                AuthOutcome::InvalidCredentials
            }
            Attempt::AccountBlocked => {
                tracing::warn!(
                    cpf = %cpf,
                    credential_id = %credential.credential_id,
                    "Login attempt on blocked account"
                );
                AuthOutcome::AccountBlocked
            }
        }
    }
}
