//! Credential Entity
//!
//! The login record of one employee: password hash plus the counter of
//! consecutive failed attempts. This is where the lockout rules live.
//!
//! ```text
//!            wrong (k < 4)          wrong (k = 4)
//!   Active(k) ----------> Active(k+1) ----------> Blocked(5)
//!      ^  |                                         |   |
//!      |  | correct                        any attempt  |
//!      |  v                                (no change)  |
//!   Active(0) <------------------ unlock ---------------+
//! ```
//!
//! Transitions are values: [`Credential::verify`] and [`Credential::settle`]
//! return a [`Transition`] holding the next state instead of mutating in
//! place, so the caller decides when (and whether) to persist it.

use chrono::{DateTime, Utc};
use derive_more::Display;
use kernel::id::{CredentialId, UserId};

use crate::domain::value_object::{
    cpf::Cpf,
    password::{RawPassword, UserPassword},
};

/// Result of a single authentication attempt
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    #[display("authenticated")]
    Authenticated,
    #[display("invalid_credentials")]
    InvalidCredentials,
    #[display("account_blocked")]
    AccountBlocked,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum CredentialState {
    #[display("active")]
    Active,
    #[display("blocked")]
    Blocked,
}

/// Outcome of running one attempt through the gate
#[derive(Debug, Clone)]
pub struct Transition {
    /// State after the attempt
    pub credential: Credential,
    pub attempt: Attempt,
    /// Whether `credential` differs from the state the attempt started from
    pub changed: bool,
}

#[derive(Debug, Clone)]
pub struct Credential {
    pub credential_id: CredentialId,
    pub user_id: UserId,
    /// Owner's CPF, read from the user row
    pub cpf: Cpf,
    pub password_hash: UserPassword,
    pub failed_attempts: u16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    /// Consecutive failures that block the credential
    pub const LOCKOUT_THRESHOLD: u16 = 5;

    pub fn new(user_id: UserId, cpf: Cpf, password_hash: UserPassword) -> Self {
        let now = Utc::now();
        Self {
            credential_id: CredentialId::new(),
            user_id,
            cpf,
            password_hash,
            failed_attempts: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.failed_attempts >= Self::LOCKOUT_THRESHOLD
    }

    #[inline]
    pub fn state(&self) -> CredentialState {
        if self.is_blocked() {
            CredentialState::Blocked
        } else {
            CredentialState::Active
        }
    }

    /// Run one login attempt
    ///
    /// A blocked credential answers `AccountBlocked` without touching the
    /// hash. Otherwise the password is checked (Argon2, CPU bound) and the
    /// counter is settled.
    pub fn verify(&self, password: &RawPassword, pepper: Option<&[u8]>) -> Transition {
        if self.is_blocked() {
            return self.unchanged(Attempt::AccountBlocked);
        }

        let matched = self.password_hash.verify(password, pepper);
        self.settle(matched)
    }

    /// Counter step for an attempt whose hash check is already known
    pub fn settle(&self, matched: bool) -> Transition {
        if self.is_blocked() {
            return self.unchanged(Attempt::AccountBlocked);
        }

        if matched {
            if self.failed_attempts == 0 {
                return self.unchanged(Attempt::Authenticated);
            }

            return Transition {
                credential: self.with_attempts(0),
                attempt: Attempt::Authenticated,
                changed: true,
            };
        }

        Transition {
            credential: self.with_attempts(self.failed_attempts.saturating_add(1)),
            attempt: Attempt::InvalidCredentials,
            changed: true,
        }
    }

    /// New hash, same counter
    pub fn with_password(&self, password_hash: UserPassword) -> Self {
        Self {
            password_hash,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Counter back to zero; idempotent
    pub fn unlocked(&self) -> Self {
        self.with_attempts(0)
    }

    fn with_attempts(&self, failed_attempts: u16) -> Self {
        Self {
            failed_attempts,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    fn unchanged(&self, attempt: Attempt) -> Transition {
        Transition {
            credential: self.clone(),
            attempt,
            changed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    const PASSWORD: &str = "Patio#Norte2024";

    // One Argon2 hash shared by every test in this module
    fn stored_hash() -> UserPassword {
        static HASH: OnceLock<UserPassword> = OnceLock::new();
        HASH.get_or_init(|| {
            let raw = RawPassword::new(PASSWORD.to_string()).unwrap();
            UserPassword::from_raw(&raw, None).unwrap()
        })
        .clone()
    }

    fn credential_with(failed_attempts: u16) -> Credential {
        Credential {
            failed_attempts,
            ..Credential::new(
                UserId::new(),
                Cpf::new("52998224725").unwrap(),
                stored_hash(),
            )
        }
    }

    fn correct() -> RawPassword {
        RawPassword::submitted(PASSWORD.to_string())
    }

    fn wrong() -> RawPassword {
        RawPassword::submitted("not-the-password".to_string())
    }

    #[test]
    fn test_new_credential_is_active_with_zero_attempts() {
        let credential = credential_with(0);
        assert_eq!(credential.failed_attempts, 0);
        assert_eq!(credential.state(), CredentialState::Active);
    }

    #[test]
    fn test_blocked_iff_threshold_reached() {
        for k in 0..Credential::LOCKOUT_THRESHOLD {
            assert!(!credential_with(k).is_blocked(), "{k} attempts");
        }
        assert!(credential_with(5).is_blocked());
        assert!(credential_with(9).is_blocked());
    }

    #[test]
    fn test_settle_mismatch_increments_by_one() {
        for k in 0..4 {
            let t = credential_with(k).settle(false);
            assert_eq!(t.credential.failed_attempts, k + 1);
            assert_eq!(t.attempt, Attempt::InvalidCredentials);
            assert!(t.changed);
            assert_eq!(t.credential.state(), CredentialState::Active);
        }
    }

    #[test]
    fn test_settle_fifth_mismatch_blocks() {
        let t = credential_with(4).settle(false);
        assert_eq!(t.credential.failed_attempts, 5);
        assert_eq!(t.attempt, Attempt::InvalidCredentials);
        assert_eq!(t.credential.state(), CredentialState::Blocked);
    }

    #[test]
    fn test_settle_match_resets() {
        let t = credential_with(3).settle(true);
        assert_eq!(t.credential.failed_attempts, 0);
        assert_eq!(t.attempt, Attempt::Authenticated);
        assert!(t.changed);
    }

    #[test]
    fn test_settle_match_at_zero_is_unchanged() {
        let t = credential_with(0).settle(true);
        assert_eq!(t.attempt, Attempt::Authenticated);
        assert!(!t.changed);
    }

    #[test]
    fn test_settle_blocked_ignores_match() {
        for matched in [true, false] {
            let t = credential_with(5).settle(matched);
            assert_eq!(t.attempt, Attempt::AccountBlocked);
            assert_eq!(t.credential.failed_attempts, 5);
            assert!(!t.changed);
        }
    }

    #[test]
    fn test_verify_blocked_fails_even_with_correct_password() {
        let t = credential_with(5).verify(&correct(), None);
        assert_eq!(t.attempt, Attempt::AccountBlocked);
        assert_eq!(t.credential.failed_attempts, 5);
        assert!(!t.changed);
    }

    #[test]
    fn test_verify_correct_and_wrong() {
        let t = credential_with(2).verify(&correct(), None);
        assert_eq!(t.attempt, Attempt::Authenticated);
        assert_eq!(t.credential.failed_attempts, 0);

        let t = credential_with(2).verify(&wrong(), None);
        assert_eq!(t.attempt, Attempt::InvalidCredentials);
        assert_eq!(t.credential.failed_attempts, 3);
    }

    #[test]
    fn test_unlock_is_idempotent() {
        let unlocked = credential_with(5).unlocked();
        assert_eq!(unlocked.failed_attempts, 0);
        assert_eq!(unlocked.state(), CredentialState::Active);
        assert_eq!(unlocked.unlocked().failed_attempts, 0);
    }

    #[test]
    fn test_with_password_keeps_counter() {
        let new_raw = RawPassword::new("Zona-Sul-Gate-9".to_string()).unwrap();
        let new_hash = UserPassword::from_raw(&new_raw, None).unwrap();

        let credential = credential_with(3).with_password(new_hash);
        assert_eq!(credential.failed_attempts, 3);

        let t = credential.verify(&correct(), None);
        assert_eq!(t.attempt, Attempt::InvalidCredentials);

        let t = credential.verify(&new_raw, None);
        assert_eq!(t.attempt, Attempt::Authenticated);
    }

    #[test]
    fn test_lockout_scenario() {
        let mut credential = credential_with(0);

        for expected in 1..=4 {
            let t = credential.verify(&wrong(), None);
            assert_eq!(t.attempt, Attempt::InvalidCredentials);
            credential = t.credential;
            assert_eq!(credential.failed_attempts, expected);
            assert_eq!(credential.state(), CredentialState::Active);
        }

        let t = credential.verify(&wrong(), None);
        credential = t.credential;
        assert_eq!(credential.failed_attempts, 5);
        assert_eq!(credential.state(), CredentialState::Blocked);

        let t = credential.verify(&correct(), None);
        assert_eq!(t.attempt, Attempt::AccountBlocked);
        credential = t.credential;
        assert_eq!(credential.failed_attempts, 5);

        credential = credential.unlocked();
        assert_eq!(credential.failed_attempts, 0);
        assert_eq!(credential.state(), CredentialState::Active);

        let t = credential.verify(&correct(), None);
        assert_eq!(t.attempt, Attempt::Authenticated);
        assert_eq!(t.credential.failed_attempts, 0);
    }
}
