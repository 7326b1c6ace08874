//! Core token codec implementation

use super::codec;
use super::strict::StrictClaims;
use super::types::{Token, TokenCodec, TokenError};
use crate::auth::secret::SharedSecret;
use serde::Serialize;

impl TokenCodec {
    /// Create a codec bound to `secret`
    pub fn new(secret: SharedSecret) -> Self {
        Self { secret }
    }

    /// Sign `claims` into a compact token
    pub fn create<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        codec::create(claims, &self.secret)
    }

    /// Verify and decode a compact token
    pub fn parse<C: StrictClaims>(&self, token: &str) -> Result<Token<C>, TokenError> {
        codec::parse(token, &self.secret)
    }

    /// Fingerprint of the bound secret, for logs
    pub fn key_fingerprint(&self) -> String {
        self.secret.fingerprint()
    }
}
