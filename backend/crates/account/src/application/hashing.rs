//! Argon2 work on Tokio's blocking pool
//!
//! Hashing and verifying take tens of milliseconds of pure CPU each; running
//! them inline would stall the request workers.

use std::sync::{Arc, OnceLock};

use crate::application::config::AccountConfig;
use crate::domain::entity::credential::{Attempt, Credential, Transition};
use crate::domain::value_object::password::{RawPassword, UserPassword};
use crate::error::AccountResult;

/// Stand-in hash checked when no credential exists for a CPF
static PLACEHOLDER_HASH: OnceLock<UserPassword> = OnceLock::new();

pub(crate) async fn hash_password(
    raw: RawPassword,
    config: Arc<AccountConfig>,
) -> AccountResult<UserPassword> {
    let hashed =
        tokio::task::spawn_blocking(move || UserPassword::from_raw(&raw, config.pepper()))
            .await??;

    Ok(hashed)
}

/// Run `Credential::verify`, handing the password back for a possible retry
pub(crate) async fn verify_attempt(
    credential: Credential,
    raw: RawPassword,
    config: Arc<AccountConfig>,
) -> AccountResult<(Transition, RawPassword)> {
    let result = tokio::task::spawn_blocking(move || {
        let transition = credential.verify(&raw, config.pepper());
        if transition.attempt != Attempt::AccountBlocked {
            config.record_verification();
        }
        (transition, raw)
    })
    .await?;

    Ok(result)
}

/// Spend one Argon2 verification on a hash nobody owns
///
/// Keeps the unknown-CPF path as slow as a wrong password.
pub(crate) async fn verify_placeholder(
    raw: RawPassword,
    config: Arc<AccountConfig>,
) -> AccountResult<()> {
    tokio::task::spawn_blocking(move || -> AccountResult<()> {
        let placeholder = match PLACEHOLDER_HASH.get() {
            Some(hash) => hash,
            None => {
                let seed = RawPassword::submitted("pulse-manager-placeholder".to_string());
                let hash = UserPassword::from_raw(&seed, config.pepper())?;
                PLACEHOLDER_HASH.get_or_init(|| hash)
            }
        };

        let _ = placeholder.verify(&raw, config.pepper());
        config.record_verification();
        Ok(())
    })
    .await??;

    Ok(())
}
