//! Random code generation for business, join and table codes.

use rand::Rng;

/// Uppercase letters and digits, used for codes people type by hand.
pub const UPPERCASE_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Mixed-case letters and digits, used for secrets and table codes.
pub const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                  abcdefghijklmnopqrstuvwxyz\
                                  0123456789";

/// Generates a random string of `length` characters drawn from `charset`.
pub fn generate_code(length: usize, charset: &[u8]) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..charset.len());
            charset[idx] as char
        })
        .collect()
}
