//! PostgreSQL Repository Implementations

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{CredentialId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    credential::Credential,
    user::{User, UserProfile},
};
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{
    birth_date::BirthDate, cpf::Cpf, email::Email, full_name::FullName, job_role::JobRole,
    password::UserPassword,
};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Unique violation on `users.cpf` means the CPF is taken
fn map_insert_error(err: sqlx::Error) -> AccountError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AccountError::DuplicateCpf
        }
        _ => AccountError::Database(err),
    }
}

const SELECT_USER: &str = r#"
    SELECT
        user_id,
        name,
        cpf,
        birth_date,
        branch,
        email,
        job_role,
        registered_at,
        updated_at
    FROM users
"#;

const SELECT_CREDENTIAL: &str = r#"
    SELECT
        c.credential_id,
        c.user_id,
        u.cpf,
        c.password_hash,
        c.failed_attempts,
        c.created_at,
        c.updated_at
    FROM login_credentials c
    JOIN users u ON u.user_id = c.user_id
"#;

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAccountRepository {
    async fn create_with_credential(
        &self,
        user: &User,
        credential: &Credential,
    ) -> AccountResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                name,
                cpf,
                birth_date,
                branch,
                email,
                job_role,
                registered_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.profile.name.as_str())
        .bind(user.cpf.as_str())
        .bind(user.profile.birth_date.date())
        .bind(user.profile.branch.as_str())
        .bind(user.profile.email.as_str())
        .bind(user.profile.job_role.id())
        .bind(user.registered_at)
        .bind(user.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_insert_error)?;

        sqlx::query(
            r#"
            INSERT INTO login_credentials (
                credential_id,
                user_id,
                password_hash,
                failed_attempts,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(credential.credential_id.as_uuid())
        .bind(credential.user_id.as_uuid())
        .bind(credential.password_hash.as_phc_string())
        .bind(attempts_to_db(credential.failed_attempts))
        .bind(credential.created_at)
        .bind(credential.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE user_id = $1"))
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_cpf(&self, cpf: &Cpf) -> AccountResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE cpf = $1)")
                .bind(cpf.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn list(&self) -> AccountResult<Vec<User>> {
        let rows =
            sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} ORDER BY registered_at, user_id"))
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(|r| r.into_user()).collect()
    }

    async fn update(&self, user: &User) -> AccountResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                name = $2,
                birth_date = $3,
                branch = $4,
                email = $5,
                job_role = $6,
                updated_at = $7
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.profile.name.as_str())
        .bind(user.profile.birth_date.date())
        .bind(user.profile.branch.as_str())
        .bind(user.profile.email.as_str())
        .bind(user.profile.job_role.id())
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, user_id: &UserId) -> AccountResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }
}

// ============================================================================
// Credential Repository Implementation
// ============================================================================

impl CredentialRepository for PgAccountRepository {
    async fn find_by_id(&self, credential_id: &CredentialId) -> AccountResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(&format!(
            "{SELECT_CREDENTIAL} WHERE c.credential_id = $1"
        ))
        .bind(credential_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_credential()).transpose()
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> AccountResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(&format!("{SELECT_CREDENTIAL} WHERE u.cpf = $1"))
            .bind(cpf.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_credential()).transpose()
    }

    async fn list(&self) -> AccountResult<Vec<Credential>> {
        let rows = sqlx::query_as::<_, CredentialRow>(&format!(
            "{SELECT_CREDENTIAL} ORDER BY c.created_at, c.credential_id"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_credential()).collect()
    }

    async fn compare_and_set_attempts(
        &self,
        current: &Credential,
        next: &Credential,
    ) -> AccountResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE login_credentials SET
                failed_attempts = $2,
                updated_at = $3
            WHERE credential_id = $1
              AND failed_attempts = $4
              AND password_hash = $5
            "#,
        )
        .bind(current.credential_id.as_uuid())
        .bind(attempts_to_db(next.failed_attempts))
        .bind(next.updated_at)
        .bind(attempts_to_db(current.failed_attempts))
        .bind(current.password_hash.as_phc_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn reset_attempts(&self, credential_id: &CredentialId) -> AccountResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE login_credentials SET
                failed_attempts = 0,
                updated_at = $2
            WHERE credential_id = $1
            "#,
        )
        .bind(credential_id.as_uuid())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn update_password_hash(
        &self,
        credential_id: &CredentialId,
        password_hash: &UserPassword,
    ) -> AccountResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE login_credentials SET
                password_hash = $2,
                updated_at = $3
            WHERE credential_id = $1
            "#,
        )
        .bind(credential_id.as_uuid())
        .bind(password_hash.as_phc_string())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, credential_id: &CredentialId) -> AccountResult<bool> {
        let result = sqlx::query("DELETE FROM login_credentials WHERE credential_id = $1")
            .bind(credential_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }
}

/// SMALLINT column; the counter never gets near the limit but saturate anyway
fn attempts_to_db(failed_attempts: u16) -> i16 {
    i16::try_from(failed_attempts).unwrap_or(i16::MAX)
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    name: String,
    cpf: String,
    birth_date: NaiveDate,
    branch: String,
    email: String,
    job_role: i16,
    registered_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AccountResult<User> {
        let job_role = JobRole::from_id(self.job_role)
            .ok_or_else(|| AccountError::Internal(format!("Invalid job_role: {}", self.job_role)))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            cpf: Cpf::from_db(self.cpf),
            profile: UserProfile {
                name: FullName::from_db(self.name),
                birth_date: BirthDate::from_db(self.birth_date),
                branch: FullName::from_db(self.branch),
                email: Email::from_db(self.email),
                job_role,
            },
            registered_at: self.registered_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    credential_id: Uuid,
    user_id: Uuid,
    cpf: String,
    password_hash: String,
    failed_attempts: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CredentialRow {
    fn into_credential(self) -> AccountResult<Credential> {
        let failed_attempts = u16::try_from(self.failed_attempts).map_err(|_| {
            AccountError::Internal(format!(
                "Negative failed_attempts: {}",
                self.failed_attempts
            ))
        })?;

        Ok(Credential {
            credential_id: CredentialId::from_uuid(self.credential_id),
            user_id: UserId::from_uuid(self.user_id),
            cpf: Cpf::from_db(self.cpf),
            password_hash: UserPassword::from_phc_string(self.password_hash)?,
            failed_attempts,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
