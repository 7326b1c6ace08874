//! Compact signed tokens
//!
//! This module provides the `header.claims.signature` token codec. The header
//! is pinned to HMAC-SHA256; claims are any strictly decodable serde type.

mod codec;
mod handler;
pub mod strict;
pub mod types;
mod utils;

pub use codec::{create, parse};
pub use strict::{StrictClaims, StrictDecodeError, from_slice_strict};
pub use types::{ALGORITHM, Header, TOKEN_TYPE, Token, TokenCodec, TokenError};
pub use utils::extract_bearer;
