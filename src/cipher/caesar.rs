use crate::modmath::mod26;
use crate::normalize::{index_letter, letter_index};

/// Shift every letter by the key: E(x) = (x + shift) mod 26.
/// Non-letters pass through at their original position.
pub fn encrypt(text: &str, shift: u8) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                index_letter(mod26(letter_index(c) + i64::from(shift)))
            } else {
                c
            }
        })
        .collect()
}

/// Decrypt is encrypt with the complementary shift
pub fn decrypt(text: &str, shift: u8) -> String {
    encrypt(text, ((26 - u32::from(shift) % 26) % 26) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(encrypt("HELLO", 3), "KHOOR");
        assert_eq!(decrypt("KHOOR", 3), "HELLO");
    }

    #[test]
    fn test_wraps_past_z() {
        assert_eq!(encrypt("XYZ", 3), "ABC");
        assert_eq!(decrypt("ABC", 3), "XYZ");
    }

    #[test]
    fn test_zero_shift_is_identity() {
        assert_eq!(encrypt("HELLO", 0), "HELLO");
        assert_eq!(decrypt("HELLO", 0), "HELLO");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(encrypt("A B, C!", 1), "B C, D!");
    }

    #[test]
    fn test_roundtrip_all_shifts() {
        for shift in 0..26 {
            assert_eq!(decrypt(&encrypt("ATTACKATDAWN", shift), shift), "ATTACKATDAWN");
        }
    }
}
