//! Authentication configuration

use super::*;
use crate::auth::SharedSecret;
use crate::utils::error::{AuthError, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Authentication configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Standard base64 of the token signing secret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Value stamped into the `iss` claim
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Session token lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,
    /// Passcode validity window in seconds
    #[serde(default = "default_passcode_step")]
    pub passcode_step_secs: u64,
    /// Passcode token lifetime in seconds
    #[serde(default = "default_passcode_ttl")]
    pub passcode_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: None,
            issuer: default_issuer(),
            session_ttl_secs: default_session_ttl(),
            passcode_step_secs: default_passcode_step(),
            passcode_ttl_secs: default_passcode_ttl(),
        }
    }
}

impl AuthConfig {
    /// Merge auth configurations, `other` wins wherever it departs from the defaults
    pub fn merge(mut self, other: Self) -> Self {
        if other.secret.is_some() {
            self.secret = other.secret;
        }
        if other.issuer != default_issuer() {
            self.issuer = other.issuer;
        }
        if other.session_ttl_secs != default_session_ttl() {
            self.session_ttl_secs = other.session_ttl_secs;
        }
        if other.passcode_step_secs != default_passcode_step() {
            self.passcode_step_secs = other.passcode_step_secs;
        }
        if other.passcode_ttl_secs != default_passcode_ttl() {
            self.passcode_ttl_secs = other.passcode_ttl_secs;
        }
        self
    }

    /// Decode the configured signing secret
    pub fn shared_secret(&self) -> Result<SharedSecret> {
        let encoded = self
            .secret
            .as_deref()
            .ok_or_else(|| AuthError::config("auth secret is not set"))?;
        SharedSecret::from_base64(encoded)
    }

    /// Fill in a freshly generated secret when none is configured.
    ///
    /// Tokens signed with a generated secret do not survive a restart.
    pub fn ensure_secret(&mut self) -> Option<SharedSecret> {
        if self.secret.is_some() {
            return None;
        }
        let secret = SharedSecret::generate();
        warn!(
            "No auth secret configured, generated one (key: {}). Set JWT_SECRET to keep tokens valid across restarts",
            secret.fingerprint()
        );
        self.secret = Some(secret.to_base64());
        Some(secret)
    }

    /// Copy safe to print, with the secret replaced by its fingerprint
    pub fn redacted(&self) -> Self {
        let secret = self.secret.as_ref().map(|encoded| {
            match SharedSecret::from_base64(encoded) {
                Ok(secret) => format!("<redacted {}>", secret.fingerprint()),
                Err(_) => "<redacted, invalid>".to_string(),
            }
        });
        Self {
            secret,
            ..self.clone()
        }
    }
}
