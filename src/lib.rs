//! # Rafiq Auth
//!
//! Authentication core for the Rafiq backend: compact HMAC-SHA256 signed
//! tokens with strict claims decoding, an expiry guard, and RFC 4226
//! time-windowed passcodes for multi-factor flows.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rafiq_auth::{AuthService, Config};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None)?;
//!     let service = AuthService::new(config.auth())?;
//!
//!     let token = service.issue_session(42)?;
//!     let claims = service.authorize(&format!("Bearer {}", token))?;
//!     assert_eq!(claims.user_id, 42);
//!
//!     let challenge = service.begin_passcode(42, "verification", serde_json::Value::Null)?;
//!     // deliver challenge.passcode out of band, hand challenge.token to the client
//!     service.redeem_passcode(&challenge.token, &challenge.passcode.to_string())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Codec only
//!
//! ```rust
//! use rafiq_auth::auth::jwt;
//! use rafiq_auth::{SessionClaims, SharedSecret};
//! use rafiq_auth::auth::BaseClaims;
//!
//! let secret = SharedSecret::new(vec![7u8; 32]);
//! let claims = SessionClaims {
//!     user_id: 1,
//!     base: BaseClaims::new("rafiq.com", chrono::Duration::hours(1)),
//! };
//! let token = jwt::create(&claims, &secret).unwrap();
//! let parsed = jwt::parse::<SessionClaims>(&token, &secret).unwrap();
//! assert_eq!(parsed.claims(), &claims);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod utils;

// Re-export main types
pub use auth::{
    AuthService, BaseClaims, HasBaseClaims, Passcode, PasscodeChallenge, PasscodeClaims,
    SessionClaims, SharedSecret, TimeStep, Token, TokenCodec, TokenError,
};
pub use config::{AuthConfig, Config, Validate};
pub use utils::error::{AuthError, Result};
pub use utils::logging::{LogFormat, LogLevel, init_logging};

/// Current version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build metadata
pub const GIT_HASH: &str = env!("GIT_HASH");
pub const BUILD_TIME: &str = env!("BUILD_TIME");
