//! Logging utilities
//!
//! This module wires up the `tracing` subscriber used by the CLI and by hosts
//! that embed the auth core.

pub mod logging;

// Re-export commonly used types and functions
pub use logging::*;
