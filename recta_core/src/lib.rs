//! Classical text cipher engine.
//!
//! Implements pre-modern substitution ciphers over Unicode code points:
//! monoalphabetic substitution (Caesar, affine, atbash, keyword) and the
//! polyalphabetic tabula recta family (Vigenère, Beaufort, variant
//! Beaufort, Gronsfeld, Della Porta, Trithemius) with running and
//! autoclave keys. None of these are secure; they are historical
//! algorithms with well-defined, testable behavior.
//!
//! # Architecture
//!
//! ```text
//! TranslationTable  (rune-to-rune map with strict/caseless policy)
//!     ↕ two inverse tables per pair
//! Tableau           (one pt/ct alphabet pair)
//!     ↕ one row per key rune, built by a RowShape generator
//! TabulaRecta       (immutable key-indexed family of tableaux)
//!     ↕ walked by a per-call keystream cursor
//! PolyalphabeticCipher (autoclave engine)
//! ```
//!
//! # Examples
//!
//! ```
//! use recta_core::{Autoclave, Cipher, LATIN};
//!
//! let cipher = recta_core::vigenere(LATIN, "KANGAROO", Autoclave::None, false, false).unwrap();
//! let ct = cipher.encipher("HELLO, WORLD!");
//! assert_eq!(ct, "REYRO, NCFVD!");
//! assert_eq!(cipher.decipher(&ct), "HELLO, WORLD!");
//! ```

pub mod alphabet;
pub mod cipher;
pub mod lcg;
pub mod mono;
pub mod poly;
pub mod rows;
pub mod tableau;
pub mod tabula;
pub mod translation;

pub use crate::alphabet::{DIGITS, LATIN};
pub use crate::cipher::{Cipher, CipherError};
pub use crate::lcg::Lcg;
pub use crate::mono::{affine, atbash, caesar, decimation, keyword, simple, MonoalphabeticCipher};
pub use crate::poly::{
    beaufort, della_porta, gronsfeld, trithemius, variant_beaufort, vigenere, Autoclave,
    PolyalphabeticCipher,
};
pub use crate::rows::RowShape;
pub use crate::tableau::Tableau;
pub use crate::tabula::TabulaRecta;
pub use crate::translation::TranslationTable;
