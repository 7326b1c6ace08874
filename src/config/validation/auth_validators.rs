//! Authentication configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

/// Minimum decoded signing secret length in bytes
pub const MIN_SECRET_LEN: usize = 32;

/// Upper bound for passcode windows
pub const MAX_PASSCODE_STEP_SECS: u64 = 60 * 60;

/// Upper bound for any token lifetime
pub const MAX_TTL_SECS: u64 = 100 * 365 * 24 * 60 * 60;

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating auth configuration");

        let secret = self
            .shared_secret()
            .map_err(|e| format!("Auth secret is unusable: {}", e))?;
        if secret.len() < MIN_SECRET_LEN {
            return Err(format!(
                "Auth secret must be at least {} bytes, got {}",
                MIN_SECRET_LEN,
                secret.len()
            ));
        }

        if self.issuer.trim().is_empty() {
            return Err("Issuer cannot be empty".to_string());
        }

        for (name, ttl) in [
            ("Session TTL", self.session_ttl_secs),
            ("Passcode TTL", self.passcode_ttl_secs),
        ] {
            if ttl == 0 {
                return Err(format!("{} must be greater than 0", name));
            }
            if ttl > MAX_TTL_SECS {
                return Err(format!("{} should not exceed {} seconds", name, MAX_TTL_SECS));
            }
        }

        if self.passcode_step_secs == 0 {
            return Err("Passcode step must be at least 1 second".to_string());
        }

        if self.passcode_step_secs > MAX_PASSCODE_STEP_SECS {
            return Err(format!(
                "Passcode step should not exceed {} seconds",
                MAX_PASSCODE_STEP_SECS
            ));
        }

        if self.passcode_ttl_secs < self.passcode_step_secs {
            return Err("Passcode TTL must cover at least one passcode step".to_string());
        }

        Ok(())
    }
}
