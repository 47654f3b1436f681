//! Short code generation.
//!
//! Codes are identifiers, not secrets: the thread-local RNG is sufficient
//! because the combinatorial space (62^7 ≈ 3.5e12) makes accidental collision
//! rare, and the store's unique constraint catches the rest. If codes ever
//! need to be unguessable this must switch to an OS-backed RNG.

use rand::Rng;

/// Alphabet for generated codes: digits, lowercase, uppercase.
const CODE_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 7;

/// Generates a random short code.
///
/// Uniform draw of [`CODE_LENGTH`] characters from the 62-character
/// alphanumeric alphabet. No uniqueness guarantee at this layer; collision
/// handling belongs to the caller.
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}
