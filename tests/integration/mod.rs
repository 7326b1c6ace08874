//! Integration tests for rafiq-auth
//!
//! These tests go through the public API only.

pub mod auth_service_tests;
pub mod config_validation_tests;
pub mod passcode_tests;
pub mod token_codec_tests;
