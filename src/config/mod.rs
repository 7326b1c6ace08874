//! Configuration management
//!
//! Settings come from an optional YAML file, then environment variables on
//! top. A missing secret is generated at load time.

mod loader;
pub mod models;
pub mod validation;

pub use loader::{ENV_ISSUER, ENV_PASSCODE_STEP, ENV_PASSCODE_TTL, ENV_SECRET, ENV_SESSION_TTL};
pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AuthError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Config {
    /// Load, overlay the environment, fill a missing secret and validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.auth.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.auth.ensure_secret();
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .map_err(|e| AuthError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AuthError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from environment variables alone
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.auth.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.auth
            .validate()
            .map_err(|e| AuthError::Config(format!("Auth config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.auth = self.auth.merge(other.auth);
        self
    }

    /// Convert to YAML with the secret redacted
    pub fn to_yaml(&self) -> Result<String> {
        let redacted = Self {
            auth: self.auth.redacted(),
        };
        serde_yaml::to_string(&redacted)
            .map_err(|e| AuthError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
