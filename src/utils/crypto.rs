//! Cryptographic helpers shared by the token codec and the passcode engine

use base64::{Engine as _, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

pub(crate) type HmacSha256 = Hmac<Sha256>;

/// Output length of HMAC-SHA256 in bytes
pub const HMAC_SHA256_LEN: usize = 32;

/// Start an HMAC-SHA256 computation keyed with `key`.
pub(crate) fn keyed_mac(key: &[u8]) -> HmacSha256 {
    match <HmacSha256 as Mac>::new_from_slice(key) {
        Ok(mac) => mac,
        // Per RFC 2104 keys of any length are accepted (long keys are hashed first),
        // so `InvalidLength` is never produced for HMAC.
        Err(_) => unreachable!("HMAC-SHA256 accepts keys of any length"),
    }
}

/// Compute `HMAC-SHA256(key, parts[0] || parts[1] || ...)`
pub fn hmac_sha256(key: &[u8], parts: &[&[u8]]) -> [u8; HMAC_SHA256_LEN] {
    let mut mac = keyed_mac(key);
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().into()
}

/// Fill a fresh buffer from the operating system CSPRNG
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Non-negative 63-bit identifier from the operating system CSPRNG
pub fn random_id() -> i64 {
    (OsRng.next_u64() >> 1) as i64
}

/// Unpadded URL-safe base64, as used on the token wire format
pub fn encode_url_safe(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode unpadded URL-safe base64; padding and non-canonical trailing bits are rejected
pub fn decode_url_safe(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE_NO_PAD.decode(text)
}

/// Short hex digest used to identify key material in logs
pub fn fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    hex::encode(&digest[..4])
}
