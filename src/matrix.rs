//! Matrix algebra over Z/26Z, the kernel behind the Hill cipher.
//!
//! The determinant uses recursive cofactor expansion along the first row,
//! reducing the running sum mod 26 at every return. That is exponential in
//! the matrix size, which is acceptable here: key matrices stay small and
//! the expansion keeps the exact reduction behavior of the closed forms.

use crate::error::{CipherError, Result};
use crate::modmath::{mod26, mod_inverse, MODULUS};
use serde::{Deserialize, Serialize};

/// Integer matrix with entries reduced into [0,26) on construction.
/// Serializes as plain nested rows, so a key matrix can be shipped as
/// JSON like `[[3,3],[2,5]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct Matrix {
    entries: Vec<Vec<i64>>,
}

impl Matrix {
    /// Build a matrix from rows. All rows must be non-empty and equally
    /// long; entries are reduced mod 26.
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(CipherError::InvalidKey("matrix must not be empty".into()));
        }
        let width = rows[0].len();
        if rows.iter().any(|row| row.len() != width) {
            return Err(CipherError::InvalidKey(
                "matrix rows must all have the same length".into(),
            ));
        }
        let entries = rows
            .into_iter()
            .map(|row| row.into_iter().map(mod26).collect())
            .collect();
        Ok(Self { entries })
    }

    /// n x 1 column vector
    pub fn column(values: &[i64]) -> Result<Self> {
        Self::new(values.iter().map(|&v| vec![v]).collect())
    }

    /// n x n identity
    pub fn identity(n: usize) -> Self {
        let entries = (0..n)
            .map(|i| (0..n).map(|j| i64::from(i == j)).collect())
            .collect();
        Self { entries }
    }

    pub fn rows(&self) -> usize {
        self.entries.len()
    }

    pub fn cols(&self) -> usize {
        self.entries[0].len()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Determinant mod 26. Closed forms for 1x1 and 2x2, cofactor
    /// expansion along the first row above that.
    pub fn determinant(&self) -> Result<i64> {
        if !self.is_square() {
            return Err(CipherError::NotSquare(self.rows(), self.cols()));
        }
        Ok(det_mod26(&self.entries))
    }

    /// Matrix with the given row and column removed
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        if !self.is_square() {
            return Err(CipherError::NotSquare(self.rows(), self.cols()));
        }
        Matrix::new(minor_of(&self.entries, row, col))
    }

    /// Inverse mod 26 via the adjugate, scaled by the inverse of the
    /// determinant. Fails when the determinant is not a unit mod 26.
    /// The result is a fresh matrix, never aliased to `self`.
    pub fn inverse(&self) -> Result<Matrix> {
        if !self.is_square() {
            return Err(CipherError::NotSquare(self.rows(), self.cols()));
        }
        let det = det_mod26(&self.entries);
        let det_inv = mod_inverse(det, MODULUS).map_err(|_| CipherError::SingularMatrix)?;
        let n = self.rows();

        if n == 1 {
            return Matrix::new(vec![vec![det_inv]]);
        }
        if n == 2 {
            let m = &self.entries;
            return Matrix::new(vec![
                vec![mod26(m[1][1] * det_inv), mod26(-m[0][1] * det_inv)],
                vec![mod26(-m[1][0] * det_inv), mod26(m[0][0] * det_inv)],
            ]);
        }

        // Cofactor matrix, transposed into the adjugate as it is built
        let mut adjugate = vec![vec![0i64; n]; n];
        for i in 0..n {
            for j in 0..n {
                let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
                let cofactor = sign * det_mod26(&minor_of(&self.entries, i, j));
                adjugate[j][i] = mod26(cofactor * det_inv);
            }
        }
        Matrix::new(adjugate)
    }

    /// Row-by-column product mod 26; requires cols(self) == rows(other)
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(CipherError::DimensionMismatch(
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols(),
            ));
        }
        let mut result = vec![vec![0i64; other.cols()]; self.rows()];
        for i in 0..self.rows() {
            for j in 0..other.cols() {
                let mut sum = 0;
                for k in 0..self.cols() {
                    sum += self.entries[i][k] * other.entries[k][j];
                }
                result[i][j] = mod26(sum);
            }
        }
        Matrix::new(result)
    }
}

fn det_mod26(m: &[Vec<i64>]) -> i64 {
    let n = m.len();
    if n == 1 {
        return mod26(m[0][0]);
    }
    if n == 2 {
        return mod26(m[0][0] * m[1][1] - m[0][1] * m[1][0]);
    }
    let mut det = 0;
    for j in 0..n {
        let sign = if j % 2 == 0 { 1 } else { -1 };
        det += m[0][j] * sign * det_mod26(&minor_of(m, 0, j));
    }
    mod26(det)
}

fn minor_of(m: &[Vec<i64>], row: usize, col: usize) -> Vec<Vec<i64>> {
    m.iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

impl std::ops::Index<usize> for Matrix {
    type Output = [i64];

    fn index(&self, row: usize) -> &Self::Output {
        &self.entries[row]
    }
}

impl TryFrom<Vec<Vec<i64>>> for Matrix {
    type Error = CipherError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Matrix::new(rows)
    }
}

impl From<Matrix> for Vec<Vec<i64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.entries
    }
}
