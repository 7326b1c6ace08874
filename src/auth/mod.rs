//! Authentication core
//!
//! Signed session tokens, the claims they carry, and one-time passcodes for
//! multi-factor flows. Everything here is synchronous and stateless apart from
//! the immutable signing secret.

pub mod claims;
pub mod jwt;
pub mod secret;
pub mod system;
pub mod totp;

// Re-export commonly used types
pub use claims::{BaseClaims, HasBaseClaims, PasscodeClaims, SessionClaims};
pub use jwt::{Header, Token, TokenCodec, TokenError};
pub use secret::SharedSecret;
pub use system::{AuthService, PasscodeChallenge};
pub use totp::{Passcode, TimeStep};
