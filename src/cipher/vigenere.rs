use crate::error::{CipherError, Result};
use crate::modmath::mod26;
use crate::normalize::{index_letter, letter_index};

/// Add the cycled keyword shifts: E(x_i) = (x_i + k_(i mod len)) mod 26
pub fn encrypt(text: &str, keyword: &str) -> Result<String> {
    shift_by_keyword(text, keyword, 1)
}

/// Subtract the same shift sequence the encryption added
pub fn decrypt(text: &str, keyword: &str) -> Result<String> {
    shift_by_keyword(text, keyword, -1)
}

/// The keyword cursor advances only on letters, so pass-through characters
/// do not consume a key position.
fn shift_by_keyword(text: &str, keyword: &str, direction: i64) -> Result<String> {
    let shifts: Vec<i64> = keyword
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                Ok(letter_index(c.to_ascii_uppercase()))
            } else {
                Err(CipherError::InvalidKey(
                    "keyword must contain only letters".into(),
                ))
            }
        })
        .collect::<Result<_>>()?;
    if shifts.is_empty() {
        return Err(CipherError::InvalidKey("keyword must not be empty".into()));
    }

    let mut cursor = 0;
    Ok(text
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                let shift = shifts[cursor % shifts.len()];
                cursor += 1;
                index_letter(mod26(letter_index(c) + direction * shift))
            } else {
                c
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(
            encrypt("ATTACKATDAWN", "LEMON").unwrap(),
            "LXFOPVEFRNHR"
        );
        assert_eq!(
            decrypt("LXFOPVEFRNHR", "LEMON").unwrap(),
            "ATTACKATDAWN"
        );
    }

    #[test]
    fn test_lowercase_keyword_accepted() {
        assert_eq!(encrypt("ATTACK", "lemon").unwrap(), "LXFOPV");
    }

    #[test]
    fn test_non_letters_do_not_consume_key() {
        // "AB CD" must shift the same letters as "ABCD" does
        let with_space = encrypt("AB CD", "LEMON").unwrap();
        let without = encrypt("ABCD", "LEMON").unwrap();
        assert_eq!(with_space.replace(' ', ""), without);
        assert_eq!(with_space.chars().nth(2), Some(' '));
    }

    #[test]
    fn test_single_letter_keyword_is_caesar() {
        assert_eq!(encrypt("HELLO", "D").unwrap(), "KHOOR");
    }

    #[test]
    fn test_invalid_keyword() {
        assert!(encrypt("TEXT", "").is_err());
        assert!(encrypt("TEXT", "K3Y").is_err());
    }
}
