//! Process-wide signing secret

use crate::utils::crypto;
use crate::utils::error::{AuthError, Result};
use base64::{Engine as _, engine::general_purpose};
use std::sync::Arc;

/// Length of generated signing secrets in bytes
pub const GENERATED_SECRET_LEN: usize = 32;

/// Symmetric secret used both to sign and to verify tokens.
///
/// Loaded once at startup and never mutated; clones share the same
/// allocation so every request handler can hold a read-only handle.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(Arc<[u8]>);

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecret")
            .field("len", &self.0.len())
            .field("fingerprint", &self.fingerprint())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl SharedSecret {
    /// Wrap existing key material
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Arc::from(bytes.into()))
    }

    /// Generate a fresh secret from the OS CSPRNG
    pub fn generate() -> Self {
        Self::new(crypto::random_bytes(GENERATED_SECRET_LEN))
    }

    /// Decode a secret from standard (padded) base64
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let bytes = general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| AuthError::config(format!("Failed to decode secret: {}", e)))?;
        Ok(Self::new(bytes))
    }

    /// Standard base64 form, suitable for `JWT_SECRET`
    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Loggable identifier of the key material
    pub fn fingerprint(&self) -> String {
        crypto::fingerprint(&self.0)
    }
}
