//! Random short code generation.
//!
//! Codes are drawn uniformly from 62 alphanumeric characters using the
//! thread-local generator from `rand`, a CSPRNG seeded from the OS.

use rand::Rng;

/// Characters a generated code is drawn from.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a regular generated code.
pub const CODE_LENGTH: usize = 6;

/// Length of the code returned once every regular attempt collided.
pub const FALLBACK_CODE_LENGTH: usize = 8;

/// Number of regular codes checked against storage before falling back.
pub const MAX_ATTEMPTS: usize = 5;

/// Generates a random code of `length` characters from [`ALPHABET`].
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(CODE_LENGTH);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
