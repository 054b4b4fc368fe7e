//! User Management Use Cases
//!
//! Listing, lookup, profile update and removal of employees.

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::id::UserId;

use crate::application::config::AccountConfig;
use crate::application::register_user::parse_profile;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::cpf::Cpf;
use crate::error::{AccountError, AccountResult};

// ============================================================================
// Queries
// ============================================================================

pub struct UserQueryUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserQueryUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn list(&self) -> AccountResult<Vec<User>> {
        self.user_repo.list().await
    }

    pub async fn get(&self, user_id: &UserId) -> AccountResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::UserNotFound)
    }
}

// ============================================================================
// Update
// ============================================================================

pub struct UpdateUserInput {
    pub name: String,
    /// Optional echo of the registered CPF; any other value is refused
    pub cpf: Option<String>,
    pub birth_date: NaiveDate,
    pub branch: String,
    pub email: String,
    pub job_role: String,
}

pub struct UpdateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountConfig>,
}

impl<U> UpdateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        input: UpdateUserInput,
        today: NaiveDate,
    ) -> AccountResult<User> {
        let profile = parse_profile(
            &input.name,
            input.birth_date,
            &input.branch,
            &input.email,
            &input.job_role,
            today,
            &self.config,
        )?;

        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        if let Some(raw_cpf) = input.cpf.as_deref() {
            if Cpf::new(raw_cpf)? != user.cpf {
                return Err(AccountError::CpfImmutable);
            }
        }

        user.update_profile(profile);

        if !self.user_repo.update(&user).await? {
            return Err(AccountError::UserNotFound);
        }

        tracing::info!(user_id = %user.user_id, "User updated");

        Ok(user)
    }
}

// ============================================================================
// Delete
// ============================================================================

pub struct DeleteUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> DeleteUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> AccountResult<()> {
        if !self.user_repo.delete(user_id).await? {
            return Err(AccountError::UserNotFound);
        }

        tracing::info!(user_id = %user_id, "User deleted");

        Ok(())
    }
}
