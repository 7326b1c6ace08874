//! Claim payloads carried inside signed tokens
//!
//! Every payload embeds [`BaseClaims`], which carries the identifier, issuer
//! and validity window. Expiry is checked here, after a token has been parsed
//! and verified; the codec itself never looks at time.

use crate::auth::jwt::TokenError;
use crate::auth::totp::TimeStep;
use crate::utils::crypto;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims shared by every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseClaims {
    /// Token identifier (`jti`)
    #[serde(rename = "jti")]
    pub id: i64,
    /// Issuer (`iss`)
    #[serde(rename = "iss")]
    pub issuer: String,
    /// Issued at (`iat`)
    #[serde(rename = "iat")]
    pub issued_at: DateTime<Utc>,
    /// Expiration (`exp`), exclusive
    #[serde(rename = "exp")]
    pub expires_at: DateTime<Utc>,
}

impl BaseClaims {
    /// Claims issued now and valid for `ttl`, with a random identifier
    pub fn new(issuer: impl Into<String>, ttl: Duration) -> Self {
        Self::issued_at(issuer, Utc::now(), ttl)
    }

    /// Claims issued at `now` and valid for `ttl`, with a random identifier
    pub fn issued_at(issuer: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            id: crypto::random_id(),
            issuer: issuer.into(),
            issued_at: now,
            expires_at: now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// True iff the current time is strictly before `expires_at`
    pub fn verify(&self) -> bool {
        self.verify_at(Utc::now())
    }

    /// True iff `now` is strictly before `expires_at`. No skew tolerance.
    pub fn verify_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    pub fn ensure_valid(&self) -> Result<(), TokenError> {
        self.ensure_valid_at(Utc::now())
    }

    pub fn ensure_valid_at(&self, now: DateTime<Utc>) -> Result<(), TokenError> {
        if self.verify_at(now) {
            Ok(())
        } else {
            Err(TokenError::Expired)
        }
    }

    /// Time left before expiry, if any
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.verify_at(now).then(|| self.expires_at - now)
    }
}

/// Access to the embedded [`BaseClaims`] of any payload
pub trait HasBaseClaims {
    fn base(&self) -> &BaseClaims;
}

impl HasBaseClaims for BaseClaims {
    fn base(&self) -> &BaseClaims {
        self
    }
}

/// Claims of a login session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user_id: i64,
    #[serde(flatten)]
    pub base: BaseClaims,
}

impl HasBaseClaims for SessionClaims {
    fn base(&self) -> &BaseClaims {
        &self.base
    }
}

/// Claims of a pending multi-factor request.
///
/// Carries the passcode secret and step so the request can be redeemed later
/// without server-side state, plus the deferred request itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasscodeClaims {
    /// Per-request passcode secret, unpadded base64url on the wire
    #[serde(with = "secret_bytes")]
    pub secret: Vec<u8>,
    /// Passcode window, whole seconds on the wire
    pub duration: TimeStep,
    pub user_id: i64,
    /// What the request does once redeemed, e.g. `verification`
    pub request_type: String,
    /// Deferred request body; opaque to this crate
    pub request_payload: serde_json::Value,
    #[serde(flatten)]
    pub base: BaseClaims,
}

impl HasBaseClaims for PasscodeClaims {
    fn base(&self) -> &BaseClaims {
        &self.base
    }
}

mod secret_bytes {
    use crate::utils::crypto;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&crypto::encode_url_safe(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        crypto::decode_url_safe(&encoded).map_err(D::Error::custom)
    }
}
