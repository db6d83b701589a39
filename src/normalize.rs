/// Uppercase the input and strip everything outside the cipher alphabet.
/// With `preserve_spaces` set, whitespace survives as well - used by the
/// transposition family, which rearranges spaces along with letters.
pub fn normalize(text: &str, preserve_spaces: bool) -> String {
    text.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase() || (preserve_spaces && c.is_whitespace()))
        .collect()
}

/// Alphabet index of an uppercase letter: A=0 .. Z=25
pub fn letter_index(c: char) -> i64 {
    c as i64 - 'A' as i64
}

/// Letter for an alphabet index in [0,26)
pub fn index_letter(i: i64) -> char {
    (b'A' + i as u8) as char
}
