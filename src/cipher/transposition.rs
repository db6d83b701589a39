//! Row/columnar transposition over a canonical rank vector: `order[i]` is
//! the position at which column i is read out. The ragged last row is
//! governed by rank order in both directions - the `len mod cols` columns
//! with the smallest ranks hold the extra character - so encrypt and
//! decrypt are exact inverses even for partial grids.

use crate::error::{CipherError, Result};

/// Fill an r x c grid row-major (ragged last row per rank order), then
/// read out whole columns in ascending rank order
pub fn encrypt(text: &str, order: &[usize]) -> Result<String> {
    let inverse = validate_order(order)?;
    let cols = order.len();
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let full_rows = len / cols;
    let extra = len % cols;

    let mut columns: Vec<Vec<char>> = order
        .iter()
        .map(|&rank| Vec::with_capacity(full_rows + usize::from(rank < extra)))
        .collect();
    let mut idx = 0;
    for _ in 0..full_rows {
        for column in columns.iter_mut() {
            column.push(chars[idx]);
            idx += 1;
        }
    }
    for (col, column) in columns.iter_mut().enumerate() {
        if order[col] < extra {
            column.push(chars[idx]);
            idx += 1;
        }
    }

    let mut out = String::with_capacity(len);
    for &col in &inverse {
        out.extend(&columns[col]);
    }
    Ok(out)
}

/// Recompute per-column lengths from the ranks, refill column by column
/// in rank order, then read row-major over the occupied cells
pub fn decrypt(text: &str, order: &[usize]) -> Result<String> {
    let inverse = validate_order(order)?;
    let cols = order.len();
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let full_rows = len / cols;
    let extra = len % cols;

    let mut columns: Vec<&[char]> = vec![&[]; cols];
    let mut idx = 0;
    for (rank, &col) in inverse.iter().enumerate() {
        let count = full_rows + usize::from(rank < extra);
        columns[col] = &chars[idx..idx + count];
        idx += count;
    }

    let mut out = String::with_capacity(len);
    for row in 0..full_rows {
        for column in &columns {
            out.push(column[row]);
        }
    }
    for (col, column) in columns.iter().enumerate() {
        if order[col] < extra {
            out.push(column[full_rows]);
        }
    }
    Ok(out)
}

/// Check that `order` is a permutation of 0..n and return its inverse:
/// `inverse[rank]` is the column holding that rank
fn validate_order(order: &[usize]) -> Result<Vec<usize>> {
    let n = order.len();
    if n == 0 {
        return Err(CipherError::InvalidKey(
            "transposition key must not be empty".into(),
        ));
    }
    let mut inverse = vec![n; n];
    for (col, &rank) in order.iter().enumerate() {
        if rank >= n || inverse[rank] != n {
            return Err(CipherError::InvalidKey(
                "column order must be a permutation".into(),
            ));
        }
        inverse[rank] = col;
    }
    Ok(inverse)
}
