use crate::cipher;
use crate::error::{CipherError, Result};
use crate::key::Key;
use std::path::Path;

/// Direction of a codec run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Run one cipher invocation on behalf of the front-end: reject blank
/// input, transform, and optionally write the result to a file.
/// Returns the transformed text either way.
pub fn run_codec(
    direction: Direction,
    key: &Key,
    text: &str,
    output: Option<&Path>,
) -> Result<String> {
    if text.trim().is_empty() {
        return Err(CipherError::EmptyInput);
    }

    let result = match direction {
        Direction::Encrypt => cipher::encrypt(key, text)?,
        Direction::Decrypt => cipher::decrypt(key, text)?,
    };

    if let Some(path) = output {
        std::fs::write(path, &result)?;
    }

    Ok(result)
}
