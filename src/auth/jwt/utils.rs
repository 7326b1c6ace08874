//! Token utility functions

/// Extract the credential from an `Authorization: Bearer <token>` header value.
///
/// The header must contain exactly two whitespace-separated fields and the
/// scheme must be `Bearer`.
pub fn extract_bearer(header_value: &str) -> Option<&str> {
    let mut fields = header_value.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}
