//! API token generation and hashing.

use sha2::{Digest, Sha256};

use crate::server::util::code::{generate_code, ALPHANUMERIC};

const TOKEN_LENGTH: usize = 48;

/// Generates a new plain-text API token.
///
/// The plain token is returned to the client once; only its hash is stored.
pub fn generate_token() -> String {
    generate_code(TOKEN_LENGTH, ALPHANUMERIC)
}

/// Returns the lowercase hex SHA-256 digest of a plain token.
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
