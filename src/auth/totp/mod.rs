//! Time-windowed one-time passcodes
//!
//! Codes follow HOTP (RFC 4226) with HMAC-SHA256: the moving factor is a
//! counter derived as `floor(unix_seconds / step)`, the digest is reduced with
//! dynamic truncation (§5.4) and the result is taken modulo 10^6.
//!
//! Validation compares against the current window only; there is no
//! look-behind or look-ahead window.

use crate::utils::crypto;
use crate::utils::error::{AuthError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// Number of decimal digits in a passcode
pub const DIGITS: u32 = 6;

/// Exclusive upper bound of passcode values
pub const MODULUS: u32 = 10u32.pow(DIGITS);

/// Length of generated per-user passcode secrets (160 bits, RFC 4226 §4 R6)
pub const SECRET_LEN: usize = 20;

/// Default window length in seconds
pub const DEFAULT_STEP_SECS: u64 = 30;

/// Length of one passcode window, in whole seconds (never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TimeStep(NonZeroU64);

impl TimeStep {
    pub fn from_secs(secs: u64) -> Result<Self> {
        NonZeroU64::new(secs)
            .map(Self)
            .ok_or_else(|| AuthError::passcode("passcode time step must be at least one second"))
    }

    /// Whole seconds of `duration`; sub-second precision is dropped.
    pub fn from_duration(duration: std::time::Duration) -> Result<Self> {
        Self::from_secs(duration.as_secs())
    }

    pub fn as_secs(&self) -> u64 {
        self.0.get()
    }

    pub fn as_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.0.get())
    }
}

impl Default for TimeStep {
    fn default() -> Self {
        Self(NonZeroU64::new(DEFAULT_STEP_SECS).unwrap_or(NonZeroU64::MIN))
    }
}

impl TryFrom<u64> for TimeStep {
    type Error = AuthError;

    fn try_from(secs: u64) -> Result<Self> {
        Self::from_secs(secs)
    }
}

impl From<TimeStep> for u64 {
    fn from(step: TimeStep) -> Self {
        step.as_secs()
    }
}

/// A passcode value, always below [`MODULUS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Passcode(u32);

impl Passcode {
    pub fn new(code: u32) -> Option<Self> {
        (code < MODULUS).then_some(Self(code))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Parse a user submission: exactly six ASCII digits, surrounding
    /// whitespace ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.len() != DIGITS as usize || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AuthError::passcode(format!(
                "passcode must be exactly {} digits",
                DIGITS
            )));
        }
        input
            .parse::<u32>()
            .map(Self)
            .map_err(|e| AuthError::passcode(e.to_string()))
    }
}

impl fmt::Display for Passcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self.0))
    }
}

/// Counter for the window containing `time`. Instants before the epoch map
/// to counter 0.
pub fn counter(time: DateTime<Utc>, step: TimeStep) -> u64 {
    u64::try_from(time.timestamp()).unwrap_or(0) / step.as_secs()
}

/// HOTP value for an explicit counter
pub fn hotp(secret: &[u8], counter: u64) -> Passcode {
    let digest = crypto::hmac_sha256(secret, &[&counter.to_be_bytes()]);
    Passcode(dynamic_truncate(&digest) % MODULUS)
}

/// RFC 4226 §5.4: 31-bit big-endian value at the offset named by the low
/// nibble of the last byte.
fn dynamic_truncate(digest: &[u8; crypto::HMAC_SHA256_LEN]) -> u32 {
    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    u32::from_be_bytes([
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ])
}

/// Passcode for the window containing `time`
pub fn generate(secret: &[u8], time: DateTime<Utc>, step: TimeStep) -> Passcode {
    hotp(secret, counter(time, step))
}

/// True iff `candidate` equals the passcode of the window containing `time`
pub fn validate(secret: &[u8], time: DateTime<Utc>, step: TimeStep, candidate: u32) -> bool {
    generate(secret, time, step).value() == candidate
}

/// Zero-padded six digit rendering.
///
/// # Panics
///
/// Panics if `code` has more than six digits; [`generate`] never produces
/// such a value, so reaching it is a caller bug.
pub fn format(code: u32) -> String {
    assert!(
        code < MODULUS,
        "passcode {} does not fit in {} digits",
        code,
        DIGITS
    );
    format!("{:0width$}", code, width = DIGITS as usize)
}

/// Fresh per-user passcode secret from the OS CSPRNG
pub fn generate_secret() -> Vec<u8> {
    crypto::random_bytes(SECRET_LEN)
}
