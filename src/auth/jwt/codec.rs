//! Create and parse compact tokens

use super::strict::{StrictClaims, from_slice_strict};
use super::types::{ALGORITHM, Header, TOKEN_TYPE, Token, TokenError};
use crate::auth::secret::SharedSecret;
use crate::utils::crypto::{self, keyed_mac};
use hmac::Mac;
use serde::Serialize;
use tracing::{debug, warn};

const SEPARATOR: &str = ".";

/// Sign `claims` under the fixed HS256/JWT header.
///
/// The signature covers the encoded text `header64 "." claims64`, exactly as
/// it appears on the wire. Fails only if `claims` cannot be serialized.
pub fn create<C: Serialize>(claims: &C, secret: &SharedSecret) -> Result<String, TokenError> {
    let header_json = serde_json::to_vec(&Header::hs256())
        .map_err(|e| TokenError::Serialization(e.to_string()))?;
    let claims_json =
        serde_json::to_vec(claims).map_err(|e| TokenError::Serialization(e.to_string()))?;

    let header64 = crypto::encode_url_safe(&header_json);
    let claims64 = crypto::encode_url_safe(&claims_json);
    let signature = crypto::hmac_sha256(
        secret.as_bytes(),
        &[header64.as_bytes(), SEPARATOR.as_bytes(), claims64.as_bytes()],
    );
    let signature64 = crypto::encode_url_safe(&signature);

    let mut token =
        String::with_capacity(header64.len() + claims64.len() + signature64.len() + 2);
    token.push_str(&header64);
    token.push_str(SEPARATOR);
    token.push_str(&claims64);
    token.push_str(SEPARATOR);
    token.push_str(&signature64);

    debug!("Created token with {} byte claims segment", claims64.len());
    Ok(token)
}

/// Decode and verify a token.
///
/// Checks run in a fixed order: segment count, base64 of all three segments,
/// strict JSON of header and claims, header pinning, then the signature.
/// Expiry is not checked here.
pub fn parse<C: StrictClaims>(token: &str, secret: &SharedSecret) -> Result<Token<C>, TokenError> {
    let parts: Vec<&str> = token.split(SEPARATOR).collect();
    let &[header64, claims64, signature64] = &parts[..] else {
        return Err(TokenError::MalformedToken(parts.len()));
    };

    let header_bytes = crypto::decode_url_safe(header64);
    let claims_bytes = crypto::decode_url_safe(claims64);
    let signature = crypto::decode_url_safe(signature64);
    let (header_bytes, claims_bytes, signature) = match (header_bytes, claims_bytes, signature) {
        (Ok(h), Ok(c), Ok(s)) => (h, c, s),
        (h, c, s) => {
            let mut failures = Vec::new();
            if let Err(e) = h {
                failures.push(format!("header: {}", e));
            }
            if let Err(e) = c {
                failures.push(format!("claims: {}", e));
            }
            if let Err(e) = s {
                failures.push(format!("signature: {}", e));
            }
            return Err(TokenError::DecodeFailure(failures));
        }
    };

    let header = from_slice_strict::<Header>(&header_bytes);
    let claims = from_slice_strict::<C>(&claims_bytes);
    let (header, claims) = match (header, claims) {
        (Ok(h), Ok(c)) => (h, c),
        (h, c) => {
            let mut failures = Vec::new();
            if let Err(e) = h {
                failures.push(format!("header: {}", e));
            }
            if let Err(e) = c {
                failures.push(format!("claims: {}", e));
            }
            return Err(TokenError::DecodeFailure(failures));
        }
    };

    if header.algorithm != ALGORITHM {
        return Err(TokenError::UnsupportedSignatureScheme(header.algorithm));
    }
    if header.token_type != TOKEN_TYPE {
        return Err(TokenError::UnsupportedTokenType(header.token_type));
    }

    // Verify over the transmitted text; re-encoding the decoded JSON is not byte-stable.
    let mut mac = keyed_mac(secret.as_bytes());
    mac.update(header64.as_bytes());
    mac.update(SEPARATOR.as_bytes());
    mac.update(claims64.as_bytes());
    if mac.verify_slice(&signature).is_err() {
        warn!("Token signature mismatch");
        return Err(TokenError::SignatureMismatch);
    }

    Ok(Token { header, claims })
}
