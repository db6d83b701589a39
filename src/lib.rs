//! Cipherkit - classical substitution and transposition ciphers
//!
//! A toolkit of seven pre-modern ciphers over uppercase A-Z text: Caesar,
//! Affine, Vigenère, Playfair, Hill, Rail Fence and Row Transposition.
//! Every cipher is a pure encrypt/decrypt pair; the shared kernels supply
//! modular arithmetic and matrix algebra over Z/26Z.
//!
//! None of these ciphers is secure. They are historical and pedagogical,
//! and all of them are trivially breakable.
//!
//! ## Architecture
//!
//! ```text
//! normalize   (uppercase A-Z filter, letter <-> index mapping)
//!     ↕
//! modmath     (gcd, modular inverse, reduction into [0,26))
//!     ↕
//! matrix      (determinant / adjugate / inverse / product mod 26)
//!     ↕
//! cipher::*   (seven peer algorithms, dispatched over a tagged Key)
//! ```
//!
//! ## Example
//!
//! ```
//! use cipherkit::{cipher, Key};
//!
//! let key = Key::caesar(3).unwrap();
//! let ciphertext = cipher::encrypt(&key, "HELLO").unwrap();
//! assert_eq!(ciphertext, "KHOOR");
//! assert_eq!(cipher::decrypt(&key, &ciphertext).unwrap(), "HELLO");
//! ```
//!
//! Keys are validated at construction, so an affine multiplier that is
//! not a unit mod 26 or a singular Hill matrix is rejected before any
//! text is touched:
//!
//! ```
//! use cipherkit::Key;
//!
//! assert!(Key::affine(4, 7).is_err());
//! ```

pub mod cipher;
pub mod cli;
pub mod error;
pub mod key;
pub mod matrix;
pub mod modmath;
pub mod normalize;

pub use error::{CipherError, Result};
pub use key::{CipherKind, Key};
pub use matrix::Matrix;
