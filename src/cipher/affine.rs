use crate::error::{CipherError, Result};
use crate::modmath::{mod26, mod_inverse};
use crate::normalize::{index_letter, letter_index};

/// E(x) = (a*x + b) mod 26. Non-letters pass through at their original
/// position. Encryption never fails; a non-unit `a` only becomes an error
/// once decryption needs its inverse.
pub fn encrypt(text: &str, a: i64, b: i64) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                index_letter(mod26(a * letter_index(c) + b))
            } else {
                c
            }
        })
        .collect()
}

/// D(y) = a^-1 * (y - b) mod 26
pub fn decrypt(text: &str, a: i64, b: i64) -> Result<String> {
    let a_inv = mod_inverse(a, 26)
        .map_err(|_| CipherError::InvalidKey("a must be coprime with 26".into()))?;
    Ok(text
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                index_letter(mod26(a_inv * (letter_index(c) - b)))
            } else {
                c
            }
        })
        .collect())
}
