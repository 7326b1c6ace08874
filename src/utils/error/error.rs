//! Error handling for the auth core
//!
//! This module defines the crate-wide error type. Token codec failures keep
//! their own taxonomy in [`TokenError`] and are wrapped here unchanged.

use crate::auth::jwt::TokenError;
use thiserror::Error;

/// Result type alias for the auth core
pub type Result<T> = std::result::Result<T, AuthError>;

/// Main error type for the auth core
#[derive(Error, Debug)]
pub enum AuthError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Signed token errors
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// One-time passcode errors
    #[error("Passcode error: {0}")]
    Passcode(String),

    /// Missing or unusable credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// Helper functions for creating specific errors
impl AuthError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn passcode<S: Into<String>>(message: S) -> Self {
        Self::Passcode(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Whether a caller should answer this failure as "unauthenticated".
    ///
    /// Every token or credential failure collapses to the same outward
    /// answer; the variant still carries the precise cause for logs.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            AuthError::Token(_) | AuthError::Unauthorized(_) | AuthError::Passcode(_)
        )
    }

    /// HTTP status a collaborator should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::Token(_) | AuthError::Unauthorized(_) | AuthError::Passcode(_) => 401,
            AuthError::Serialization(_) => 400,
            AuthError::Config(_) => 500,
        }
    }

    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::Config(_) => "CONFIG_ERROR",
            AuthError::Serialization(_) => "SERIALIZATION_ERROR",
            AuthError::Token(TokenError::Expired) => "TOKEN_EXPIRED",
            AuthError::Token(_) => "INVALID_TOKEN",
            AuthError::Passcode(_) => "INVALID_PASSCODE",
            AuthError::Unauthorized(_) => "UNAUTHORIZED",
        }
    }
}
