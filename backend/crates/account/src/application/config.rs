//! Application Configuration
//!
//! Configuration for the Account application layer.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Account application configuration
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Reload-and-retry rounds when a counter update loses a race
    pub max_cas_retries: u32,
    /// Minimum employee age in completed years
    pub minimum_age: u32,
    /// Argon2 verifications run on behalf of login attempts, shared by clones
    verifications: Arc<AtomicU64>,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            password_pepper: None,
            max_cas_retries: 5,
            minimum_age: 18,
            verifications: Arc::default(),
        }
    }
}

impl AccountConfig {
    /// Fixed, public pepper so local builds exercise the peppered code path
    pub fn development() -> Self {
        Self {
            password_pepper: Some(b"pulse-manager-development-pepper".to_vec()),
            ..Default::default()
        }
    }

    pub fn with_pepper(pepper: Vec<u8>) -> Self {
        Self {
            password_pepper: Some(pepper),
            ..Default::default()
        }
    }

    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    pub fn verification_count(&self) -> u64 {
        self.verifications.load(Ordering::Relaxed)
    }

    pub(crate) fn record_verification(&self) {
        self.verifications.fetch_add(1, Ordering::Relaxed);
    }
}
