//! Cipher selection and key material.
//!
//! A key is a tagged variant per cipher, built through validating
//! constructors so malformed key material never reaches an algorithm.
//! Both observed transposition key encodings are supported distinguishably:
//! a letter keyword (columns ranked by stable lexicographic order) or an
//! explicit 1..n permutation; each normalizes to the same canonical
//! 0-based rank vector.

use crate::error::{CipherError, Result};
use crate::matrix::Matrix;
use crate::modmath::gcd;
use serde::{Deserialize, Serialize};

/// The seven supported ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    #[default]
    Caesar,
    Affine,
    Vigenere,
    Playfair,
    Hill,
    RailFence,
    RowTransposition,
}

impl std::str::FromStr for CipherKind {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "caesar" => Ok(Self::Caesar),
            "affine" => Ok(Self::Affine),
            "vigenere" | "vigenère" => Ok(Self::Vigenere),
            "playfair" => Ok(Self::Playfair),
            "hill" => Ok(Self::Hill),
            "railfence" | "rail-fence" => Ok(Self::RailFence),
            "rowtransposition" | "row-transposition" | "transposition" => {
                Ok(Self::RowTransposition)
            }
            _ => Err(CipherError::UnsupportedCipher(s.to_string())),
        }
    }
}

/// Validated key material for one encrypt/decrypt invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cipher", rename_all = "lowercase")]
pub enum Key {
    Caesar { shift: u8 },
    Affine { a: i64, b: i64 },
    Vigenere { keyword: String },
    Playfair { keyword: String },
    Hill { matrix: Matrix },
    RailFence { rails: usize },
    RowTransposition { order: Vec<usize> },
}

impl Key {
    /// Caesar shift in [0,25]
    pub fn caesar(shift: u8) -> Result<Self> {
        if shift > 25 {
            return Err(CipherError::InvalidKey(
                "shift value must be between 0 and 25".into(),
            ));
        }
        Ok(Key::Caesar { shift })
    }

    /// Affine pair: `a` must be a unit mod 26, `b` in [0,25]
    pub fn affine(a: i64, b: i64) -> Result<Self> {
        if !(1..=25).contains(&a) || gcd(a, 26) != 1 {
            return Err(CipherError::InvalidKey(
                "a value must be coprime with 26 (one of 1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25)"
                    .into(),
            ));
        }
        if !(0..=25).contains(&b) {
            return Err(CipherError::InvalidKey(
                "b value must be between 0 and 25".into(),
            ));
        }
        Ok(Key::Affine { a, b })
    }

    /// Vigenère keyword, letters only, cycled over the text
    pub fn vigenere(keyword: &str) -> Result<Self> {
        Ok(Key::Vigenere {
            keyword: validate_keyword(keyword)?,
        })
    }

    /// Playfair keyword used to derive the 5x5 grid
    pub fn playfair(keyword: &str) -> Result<Self> {
        Ok(Key::Playfair {
            keyword: validate_keyword(keyword)?,
        })
    }

    /// Hill key matrix: square, at least 2x2, determinant a unit mod 26
    pub fn hill(matrix: Matrix) -> Result<Self> {
        if !matrix.is_square() {
            return Err(CipherError::NotSquare(matrix.rows(), matrix.cols()));
        }
        if matrix.rows() < 2 {
            return Err(CipherError::InvalidKey(
                "hill matrix must be at least 2x2".into(),
            ));
        }
        if gcd(matrix.determinant()?, 26) != 1 {
            return Err(CipherError::SingularMatrix);
        }
        Ok(Key::Hill { matrix })
    }

    /// Rail count, at least 1 (a single rail is the identity)
    pub fn rail_fence(rails: usize) -> Result<Self> {
        if rails == 0 {
            return Err(CipherError::InvalidKey(
                "number of rails must be at least 1".into(),
            ));
        }
        Ok(Key::RailFence { rails })
    }

    /// Transposition key from a letter keyword: columns are ranked by the
    /// lexicographic order of their letters, ties broken by column position
    pub fn row_transposition_keyword(keyword: &str) -> Result<Self> {
        let keyword = validate_keyword(keyword)?;
        Ok(Key::RowTransposition {
            order: column_ranks(&keyword),
        })
    }

    /// Transposition key as an explicit permutation of 1..n, where the
    /// i-th number is the position at which column i is read out
    pub fn row_transposition_order(positions: &[usize]) -> Result<Self> {
        let n = positions.len();
        if n == 0 {
            return Err(CipherError::InvalidKey(
                "transposition key must not be empty".into(),
            ));
        }
        let mut seen = vec![false; n];
        for &p in positions {
            if p < 1 || p > n || seen[p - 1] {
                return Err(CipherError::InvalidKey(format!(
                    "key must be a permutation of 1..{}",
                    n
                )));
            }
            seen[p - 1] = true;
        }
        Ok(Key::RowTransposition {
            order: positions.iter().map(|&p| p - 1).collect(),
        })
    }

    pub fn kind(&self) -> CipherKind {
        match self {
            Key::Caesar { .. } => CipherKind::Caesar,
            Key::Affine { .. } => CipherKind::Affine,
            Key::Vigenere { .. } => CipherKind::Vigenere,
            Key::Playfair { .. } => CipherKind::Playfair,
            Key::Hill { .. } => CipherKind::Hill,
            Key::RailFence { .. } => CipherKind::RailFence,
            Key::RowTransposition { .. } => CipherKind::RowTransposition,
        }
    }
}

/// Uppercase a keyword, rejecting empty or non-letter input
fn validate_keyword(keyword: &str) -> Result<String> {
    if keyword.is_empty() || !keyword.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CipherError::InvalidKey(
            "keyword must contain only letters".into(),
        ));
    }
    Ok(keyword.to_ascii_uppercase())
}

fn column_ranks(keyword: &str) -> Vec<usize> {
    let mut indexed: Vec<(char, usize)> = keyword.chars().enumerate().map(|(i, c)| (c, i)).collect();
    // sort_by_key is stable, so repeated letters keep their column order
    indexed.sort_by_key(|&(c, _)| c);
    let mut order = vec![0; indexed.len()];
    for (rank, &(_, column)) in indexed.iter().enumerate() {
        order[column] = rank;
    }
    order
}
