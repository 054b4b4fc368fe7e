//! User Entity
//!
//! An employee registered in the yard management system.
//! Login data lives in the Credential entity.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    birth_date::BirthDate, cpf::Cpf, email::Email, full_name::FullName, job_role::JobRole,
};

/// Fields an administrator may edit after registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: FullName,
    pub birth_date: BirthDate,
    /// Branch the employee works at
    pub branch: FullName,
    pub email: Email,
    pub job_role: JobRole,
}

#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Login key; fixed once registered
    pub cpf: Cpf,
    pub profile: UserProfile,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(cpf: Cpf, profile: UserProfile) -> Self {
        let now = Utc::now();
        Self {
            user_id: UserId::new(),
            cpf,
            profile,
            registered_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields; `registered_at` never moves
    pub fn update_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
        self.updated_at = Utc::now();
    }
}
