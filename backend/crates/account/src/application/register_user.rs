//! Register User Use Case
//!
//! Creates an employee together with their login credential.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::config::AccountConfig;
use crate::application::hashing;
use crate::domain::entity::{
    credential::Credential,
    user::{User, UserProfile},
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    birth_date::BirthDate, cpf::Cpf, email::Email, full_name::FullName, job_role::JobRole,
    password::RawPassword,
};
use crate::error::{AccountError, AccountResult};

pub struct RegisterUserInput {
    pub name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub branch: String,
    pub email: String,
    pub job_role: String,
    pub password: String,
}

/// Profile fields shared by registration and update
pub(crate) fn parse_profile(
    name: &str,
    birth_date: NaiveDate,
    branch: &str,
    email: &str,
    job_role: &str,
    today: NaiveDate,
    config: &AccountConfig,
) -> AccountResult<UserProfile> {
    Ok(UserProfile {
        name: FullName::new(name)?,
        birth_date: BirthDate::new(birth_date, today, config.minimum_age)?,
        branch: FullName::labelled(branch, "Branch")?,
        email: Email::new(email)?,
        job_role: job_role.parse::<JobRole>()?,
    })
}

pub struct RegisterUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountConfig>,
}

impl<U> RegisterUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountConfig>) -> Self {
        Self { user_repo, config }
    }

    /// `today` decides the age check
    pub async fn execute(&self, input: RegisterUserInput, today: NaiveDate) -> AccountResult<User> {
        let cpf = Cpf::new(&input.cpf)?;
        let profile = parse_profile(
            &input.name,
            input.birth_date,
            &input.branch,
            &input.email,
            &input.job_role,
            today,
            &self.config,
        )?;
        let raw_password = RawPassword::new(input.password)?;

        // Fast path; the unique index catches the race
        if self.user_repo.exists_by_cpf(&cpf).await? {
            return Err(AccountError::DuplicateCpf);
        }

        let password_hash = hashing::hash_password(raw_password, self.config.clone()).await?;

        let user = User::new(cpf.clone(), profile);
        let credential = Credential::new(user.user_id, cpf, password_hash);

        self.user_repo
            .create_with_credential(&user, &credential)
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            credential_id = %credential.credential_id,
            cpf = %user.cpf,
            job_role = %user.profile.job_role,
            "User registered"
        );

        Ok(user)
    }
}
