//! Utility modules shared across the crate

pub mod crypto;
pub mod error;
pub mod logging;
