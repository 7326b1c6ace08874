//! Configuration data models

pub mod auth;

pub use auth::*;

/// Default token issuer
pub fn default_issuer() -> String {
    "rafiq.com".to_string()
}

/// Default session lifetime in seconds
pub fn default_session_ttl() -> u64 {
    365 * 24 * 60 * 60 // one year
}

/// Default passcode window in seconds
pub fn default_passcode_step() -> u64 {
    5 * 60
}

/// Default passcode token lifetime in seconds
pub fn default_passcode_ttl() -> u64 {
    10 * 60
}
