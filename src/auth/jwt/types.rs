//! Token types and data structures

use crate::auth::secret::SharedSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only accepted signature scheme
pub const ALGORITHM: &str = "HS256";

/// The only accepted token type
pub const TOKEN_TYPE: &str = "JWT";

/// Token header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Signature scheme (`alg`)
    #[serde(rename = "alg")]
    pub algorithm: String,
    /// Token type (`typ`)
    #[serde(rename = "typ")]
    pub token_type: String,
}

impl Header {
    /// The fixed header emitted by every created token
    pub fn hs256() -> Self {
        Self {
            algorithm: ALGORITHM.to_string(),
            token_type: TOKEN_TYPE.to_string(),
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::hs256()
    }
}

/// A verified token. Only produced by a successful parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<C> {
    pub(super) header: Header,
    pub(super) claims: C,
}

impl<C> Token<C> {
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn claims(&self) -> &C {
        &self.claims
    }

    pub fn into_claims(self) -> C {
        self.claims
    }

    pub fn into_parts(self) -> (Header, C) {
        (self.header, self.claims)
    }
}

/// Token codec failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The wire string did not have exactly three segments
    #[error("token contains an invalid number of segments: {0}")]
    MalformedToken(usize),

    /// Base64 or strict JSON decoding failed for one or more segments
    #[error("token decode failed: {}", .0.join("; "))]
    DecodeFailure(Vec<String>),

    /// Header `alg` is not HS256
    #[error("unsupported signature scheme: {0}")]
    UnsupportedSignatureScheme(String),

    /// Header `typ` is not JWT
    #[error("unsupported token type: {0}")]
    UnsupportedTokenType(String),

    /// The recomputed HMAC does not match the transmitted signature
    #[error("signature doesn't match")]
    SignatureMismatch,

    /// Reported by the claims time guard, never by parsing
    #[error("token expired")]
    Expired,

    /// The caller's claims could not be serialized
    #[error("failed to serialize token claims: {0}")]
    Serialization(String),
}

/// Token codec bound to one signing secret
#[derive(Clone)]
pub struct TokenCodec {
    pub(super) secret: SharedSecret,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &ALGORITHM)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
