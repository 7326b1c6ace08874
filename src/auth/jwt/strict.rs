//! Strict JSON decoding
//!
//! serde silently ignores object keys a type does not declare, and its
//! `deny_unknown_fields` attribute cannot be combined with `#[serde(flatten)]`,
//! which is how every claims type embeds [`BaseClaims`](crate::auth::claims::BaseClaims).
//! The decoder here therefore compares key sets explicitly: the input is
//! decoded into the target type, the result is serialized back, and any input
//! key missing from that re-serialization is an undeclared field. Nested
//! objects and arrays are checked recursively.
//!
//! A type whose `Serialize` impl omits declared fields (`skip_serializing_if`,
//! `alias`) would have those keys reported as unknown; claims types should
//! serialize every field they accept.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Payloads the token codec can carry: serializable, and strictly decodable
/// through [`from_slice_strict`].
pub trait StrictClaims: Serialize + DeserializeOwned {}

impl<T: Serialize + DeserializeOwned> StrictClaims for T {}

/// Strict decoding failures
#[derive(Error, Debug)]
pub enum StrictDecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown field `{0}`")]
    UnknownField(String),
}

/// Decode `bytes` into `T`, failing on any key `T` does not declare.
pub fn from_slice_strict<T: StrictClaims>(bytes: &[u8]) -> Result<T, StrictDecodeError> {
    let raw: Value = serde_json::from_slice(bytes)?;
    let decoded = T::deserialize(&raw)?;
    let declared = serde_json::to_value(&decoded)?;

    match first_undeclared(&raw, &declared, "") {
        Some(field) => Err(StrictDecodeError::UnknownField(field)),
        None => Ok(decoded),
    }
}

fn first_undeclared(raw: &Value, declared: &Value, path: &str) -> Option<String> {
    match (raw, declared) {
        (Value::Object(raw), Value::Object(declared)) => raw.iter().find_map(|(key, value)| {
            let field = if path.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", path, key)
            };
            match declared.get(key) {
                Some(declared_value) => first_undeclared(value, declared_value, &field),
                None => Some(field),
            }
        }),
        (Value::Array(raw), Value::Array(declared)) => raw
            .iter()
            .zip(declared)
            .enumerate()
            .find_map(|(i, (r, d))| first_undeclared(r, d, &format!("{}[{}]", path, i))),
        _ => None,
    }
}
