use crate::error::Result;
use crate::matrix::Matrix;
use crate::normalize::{index_letter, letter_index, normalize};

/// Encrypt blocks of n letters as n-vectors left-multiplied by the key
/// matrix mod 26. The text is normalized to letters and padded with 'X'
/// up to a multiple of the block size.
pub fn encrypt(text: &str, matrix: &Matrix) -> Result<String> {
    let n = matrix.rows();
    let mut letters: Vec<char> = normalize(text, false).chars().collect();
    while letters.len() % n != 0 {
        letters.push('X');
    }

    let mut out = String::with_capacity(letters.len());
    for block in letters.chunks(n) {
        let indices: Vec<i64> = block.iter().map(|&c| letter_index(c)).collect();
        let product = matrix.multiply(&Matrix::column(&indices)?)?;
        for row in 0..n {
            out.push(index_letter(product[row][0]));
        }
    }
    Ok(out)
}

/// Decryption is encryption with the derived inverse matrix, so its
/// correctness reduces to the inverse computation plus `encrypt`. Fails
/// before any transformation when the matrix has no inverse mod 26.
pub fn decrypt(text: &str, matrix: &Matrix) -> Result<String> {
    encrypt(text, &matrix.inverse()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    fn key_2x2() -> Matrix {
        Matrix::new(vec![vec![3, 3], vec![2, 5]]).unwrap()
    }

    #[test]
    fn test_known_vector_2x2() {
        // HE -> (33, 34) -> HI, LP -> (78, 97) -> AT
        assert_eq!(encrypt("HELP", &key_2x2()).unwrap(), "HIAT");
        assert_eq!(decrypt("HIAT", &key_2x2()).unwrap(), "HELP");
    }

    #[test]
    fn test_known_vector_3x3() {
        let key = Matrix::new(vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]).unwrap();
        assert_eq!(encrypt("ACT", &key).unwrap(), "POH");
        assert_eq!(decrypt("POH", &key).unwrap(), "ACT");
    }

    #[test]
    fn test_pads_to_block_size() {
        assert_eq!(encrypt("HEL", &key_2x2()).unwrap(), "HIYH");
        assert_eq!(decrypt("HIYH", &key_2x2()).unwrap(), "HELX");
    }

    #[test]
    fn test_normalizes_input() {
        assert_eq!(
            encrypt("help!", &key_2x2()).unwrap(),
            encrypt("HELP", &key_2x2()).unwrap()
        );
    }

    #[test]
    fn test_singular_matrix_fails_before_transform() {
        let singular = Matrix::new(vec![vec![2, 4], vec![1, 2]]).unwrap();
        assert!(matches!(
            decrypt("ANYTEXT", &singular),
            Err(CipherError::SingularMatrix)
        ));
    }

    #[test]
    fn test_empty_input_is_noop() {
        assert_eq!(encrypt("", &key_2x2()).unwrap(), "");
        assert_eq!(decrypt("", &key_2x2()).unwrap(), "");
    }
}
