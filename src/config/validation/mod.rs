//! Configuration validation
//!
//! - `trait_def`: the Validate trait
//! - `auth_validators`: authentication settings
//! - `tests`: validator test suite

mod auth_validators;
mod trait_def;

pub use auth_validators::{MAX_PASSCODE_STEP_SECS, MAX_TTL_SECS, MIN_SECRET_LEN};
pub use trait_def::Validate;
