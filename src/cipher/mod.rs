pub mod affine;
pub mod caesar;
pub mod hill;
pub mod playfair;
pub mod rail_fence;
pub mod transposition;
pub mod vigenere;

use crate::error::Result;
use crate::key::Key;
use crate::normalize::normalize;

/// Encrypt `text` with the cipher selected by `key`, applying the
/// per-cipher normalization policy first: letters-only for the
/// substitution family, whitespace-preserving for the ciphers that
/// rearrange rather than substitute. Playfair and Hill normalize
/// internally as part of their digraph/padding rules.
pub fn encrypt(key: &Key, text: &str) -> Result<String> {
    match key {
        Key::Caesar { shift } => Ok(caesar::encrypt(&normalize(text, false), *shift)),
        Key::Affine { a, b } => Ok(affine::encrypt(&normalize(text, false), *a, *b)),
        Key::Vigenere { keyword } => vigenere::encrypt(&normalize(text, false), keyword),
        Key::Playfair { keyword } => playfair::encrypt(text, keyword),
        Key::Hill { matrix } => hill::encrypt(text, matrix),
        Key::RailFence { rails } => Ok(rail_fence::encrypt(&normalize(text, true), *rails)),
        Key::RowTransposition { order } => transposition::encrypt(&normalize(text, true), order),
    }
}

/// Inverse of [`encrypt`] under the same key
pub fn decrypt(key: &Key, text: &str) -> Result<String> {
    match key {
        Key::Caesar { shift } => Ok(caesar::decrypt(&normalize(text, false), *shift)),
        Key::Affine { a, b } => affine::decrypt(&normalize(text, false), *a, *b),
        Key::Vigenere { keyword } => vigenere::decrypt(&normalize(text, false), keyword),
        Key::Playfair { keyword } => playfair::decrypt(text, keyword),
        Key::Hill { matrix } => hill::decrypt(text, matrix),
        Key::RailFence { rails } => Ok(rail_fence::decrypt(&normalize(text, true), *rails)),
        Key::RowTransposition { order } => transposition::decrypt(&normalize(text, true), order),
    }
}
