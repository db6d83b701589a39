use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No text supplied")]
    EmptyInput,

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("{0} has no inverse modulo {1}")]
    NoInverse(i64, i64),

    #[error("Matrix is not invertible modulo 26")]
    SingularMatrix,

    #[error("Matrix must be square, got {0}x{1}")]
    NotSquare(usize, usize),

    #[error("Matrix dimension mismatch: {0}x{1} * {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),

    #[error("Character '{0}' not found in the Playfair grid")]
    CharacterNotInGrid(char),

    #[error("Unsupported cipher: {0}")]
    UnsupportedCipher(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
