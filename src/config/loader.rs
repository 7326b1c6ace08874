//! Environment variable overrides

use super::models::*;
use crate::utils::error::{AuthError, Result};
use std::str::FromStr;
use tracing::debug;

pub const ENV_SECRET: &str = "JWT_SECRET";
pub const ENV_ISSUER: &str = "JWT_ISSUER";
pub const ENV_SESSION_TTL: &str = "SESSION_TTL_SECS";
pub const ENV_PASSCODE_STEP: &str = "PASSCODE_STEP_SECS";
pub const ENV_PASSCODE_TTL: &str = "PASSCODE_TTL_SECS";

impl AuthConfig {
    /// Overlay values found through `lookup`, usually `std::env::var`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup(ENV_SECRET).filter(|s| !s.trim().is_empty()) {
            debug!("Auth secret taken from {}", ENV_SECRET);
            self.secret = Some(secret);
        }
        if let Some(issuer) = lookup(ENV_ISSUER) {
            self.issuer = issuer;
        }
        if let Some(value) = lookup(ENV_SESSION_TTL) {
            self.session_ttl_secs = parse_var(ENV_SESSION_TTL, &value)?;
        }
        if let Some(value) = lookup(ENV_PASSCODE_STEP) {
            self.passcode_step_secs = parse_var(ENV_PASSCODE_STEP, &value)?;
        }
        if let Some(value) = lookup(ENV_PASSCODE_TTL) {
            self.passcode_ttl_secs = parse_var(ENV_PASSCODE_TTL, &value)?;
        }
        Ok(())
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| AuthError::Config(format!("Invalid {}: {}", name, e)))
}
