//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::{credential::Credential, user::User};

// ============================================================================
// Users
// ============================================================================

/// Registration request (no `Debug`: carries a password)
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub cpf: String,
    /// `YYYY-MM-DD`
    pub birth_date: NaiveDate,
    pub branch: String,
    pub email: String,
    pub job_role: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: String,
    #[serde(default)]
    pub cpf: Option<String>,
    pub birth_date: NaiveDate,
    pub branch: String,
    pub email: String,
    pub job_role: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    /// `000.000.000-00`
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub branch: String,
    pub email: String,
    pub job_role: String,
    pub registered_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.into_uuid(),
            name: user.profile.name.as_str().to_string(),
            cpf: user.cpf.formatted(),
            birth_date: user.profile.birth_date.date(),
            branch: user.profile.branch.as_str().to_string(),
            email: user.profile.email.as_str().to_string(),
            job_role: user.profile.job_role.code().to_string(),
            registered_at: user.registered_at,
        }
    }
}

// ============================================================================
// Login
// ============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateRequest {
    pub cpf: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub password: String,
}

/// Login view; never includes the hash
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub credential_id: Uuid,
    pub user_id: Uuid,
    /// Only the check digits: `***.***.***-NN`
    pub cpf: String,
    pub failed_attempts: u16,
    pub blocked: bool,
}

impl From<&Credential> for LoginResponse {
    fn from(credential: &Credential) -> Self {
        Self {
            credential_id: credential.credential_id.into_uuid(),
            user_id: credential.user_id.into_uuid(),
            cpf: credential.cpf.masked(),
            failed_attempts: credential.failed_attempts,
            blocked: credential.is_blocked(),
        }
    }
}
