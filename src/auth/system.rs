//! Authentication service
//!
//! Glue between the codec, the claims time guard and the passcode engine for
//! the three host flows: session issuance, bearer authorization, and
//! multi-factor challenges.

use super::claims::{BaseClaims, PasscodeClaims, SessionClaims};
use super::jwt::{TokenCodec, extract_bearer};
use super::totp::{self, Passcode, TimeStep};
use crate::config::AuthConfig;
use crate::utils::error::{AuthError, Result};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A freshly issued passcode challenge.
///
/// `passcode` goes to the user out of band (email, SMS); `token` goes back to
/// the client and is presented together with the code.
#[derive(Debug, Clone)]
pub struct PasscodeChallenge {
    pub token: String,
    pub passcode: Passcode,
    pub expires_at: DateTime<Utc>,
}

/// Main authentication service
#[derive(Debug, Clone)]
pub struct AuthService {
    codec: TokenCodec,
    issuer: Arc<str>,
    session_ttl: Duration,
    passcode_step: TimeStep,
    passcode_ttl: Duration,
}

impl AuthService {
    /// Create a service from validated configuration
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let secret = config.shared_secret()?;
        let session_ttl = seconds(config.session_ttl_secs, "session_ttl_secs")?;
        let passcode_ttl = seconds(config.passcode_ttl_secs, "passcode_ttl_secs")?;
        let passcode_step = TimeStep::from_secs(config.passcode_step_secs)?;

        info!(
            "Auth service initialized (issuer: {}, key: {})",
            config.issuer,
            secret.fingerprint()
        );

        Ok(Self {
            codec: TokenCodec::new(secret),
            issuer: Arc::from(config.issuer.as_str()),
            session_ttl,
            passcode_step,
            passcode_ttl,
        })
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Mint a session token for an authenticated user
    pub fn issue_session(&self, user_id: i64) -> Result<String> {
        self.issue_session_at(user_id, Utc::now())
    }

    pub fn issue_session_at(&self, user_id: i64, now: DateTime<Utc>) -> Result<String> {
        let claims = SessionClaims {
            user_id,
            base: BaseClaims::issued_at(self.issuer.as_ref(), now, self.session_ttl),
        };
        let token = self.codec.create(&claims)?;
        debug!("Issued session token {} for user {}", claims.base.id, user_id);
        Ok(token)
    }

    /// Authorize an `Authorization` header value.
    ///
    /// Any failure is an authentication failure; the error keeps the cause.
    pub fn authorize(&self, authorization: &str) -> Result<SessionClaims> {
        self.authorize_at(authorization, Utc::now())
    }

    pub fn authorize_at(&self, authorization: &str, now: DateTime<Utc>) -> Result<SessionClaims> {
        let token = extract_bearer(authorization)
            .ok_or_else(|| AuthError::unauthorized("missing bearer credential"))?;
        self.verify_session_at(token, now)
    }

    /// Verify a bare session token
    pub fn verify_session(&self, token: &str) -> Result<SessionClaims> {
        self.verify_session_at(token, Utc::now())
    }

    pub fn verify_session_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims> {
        let claims = self
            .codec
            .parse::<SessionClaims>(token)
            .inspect_err(|e| warn!("Session token rejected: {}", e))?
            .into_claims();
        claims
            .base
            .ensure_valid_at(now)
            .inspect_err(|_| debug!("Session token {} expired", claims.base.id))?;
        Ok(claims)
    }

    /// Start a multi-factor challenge for a deferred request
    pub fn begin_passcode(
        &self,
        user_id: i64,
        request_type: impl Into<String>,
        request_payload: serde_json::Value,
    ) -> Result<PasscodeChallenge> {
        self.begin_passcode_at(user_id, request_type, request_payload, Utc::now())
    }

    pub fn begin_passcode_at(
        &self,
        user_id: i64,
        request_type: impl Into<String>,
        request_payload: serde_json::Value,
        now: DateTime<Utc>,
    ) -> Result<PasscodeChallenge> {
        let secret = totp::generate_secret();
        let passcode = totp::generate(&secret, now, self.passcode_step);
        let claims = PasscodeClaims {
            secret,
            duration: self.passcode_step,
            user_id,
            request_type: request_type.into(),
            request_payload,
            base: BaseClaims::issued_at(self.issuer.as_ref(), now, self.passcode_ttl),
        };
        let token = self.codec.create(&claims)?;

        debug!(
            "Issued {} passcode challenge {} for user {}",
            claims.request_type, claims.base.id, user_id
        );
        Ok(PasscodeChallenge {
            token,
            passcode,
            expires_at: claims.base.expires_at,
        })
    }

    /// Redeem a challenge with the code the user submitted
    pub fn redeem_passcode(&self, token: &str, submitted: &str) -> Result<PasscodeClaims> {
        self.redeem_passcode_at(token, submitted, Utc::now())
    }

    pub fn redeem_passcode_at(
        &self,
        token: &str,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> Result<PasscodeClaims> {
        let claims = self
            .codec
            .parse::<PasscodeClaims>(token)
            .inspect_err(|e| warn!("Passcode token rejected: {}", e))?
            .into_claims();
        claims.base.ensure_valid_at(now)?;

        let passcode = Passcode::parse(submitted)?;
        if !totp::validate(&claims.secret, now, claims.duration, passcode.value()) {
            warn!("Invalid passcode for challenge {}", claims.base.id);
            return Err(AuthError::passcode("invalid passcode"));
        }

        debug!("Redeemed passcode challenge {}", claims.base.id);
        Ok(claims)
    }
}

fn seconds(value: u64, field: &str) -> Result<Duration> {
    i64::try_from(value)
        .ok()
        .and_then(Duration::try_seconds)
        .filter(|d| *d > Duration::zero())
        .ok_or_else(|| AuthError::config(format!("{} is out of range: {}", field, value)))
}
