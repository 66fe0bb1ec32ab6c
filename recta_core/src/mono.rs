//! Monoalphabetic substitution ciphers: a single fixed tableau instead of
//! a keystream-driven family of them.

use crate::alphabet::dedupe;
use crate::cipher::{Cipher, CipherError};
use crate::rows::{affine_alphabet, caesar_alphabet};
use crate::tableau::Tableau;

/// A substitution cipher over one plaintext/ciphertext alphabet pair.
#[derive(Clone, Debug)]
pub struct MonoalphabeticCipher {
    pt_alphabet: String,
    ct_alphabet: String,
    tableau: Tableau,
}

impl MonoalphabeticCipher {
    fn build(
        pt_alphabet: &str,
        ct_alphabet: String,
        strict: bool,
        caseless: bool,
    ) -> Result<Self, CipherError> {
        let tableau = Tableau::new(pt_alphabet, &ct_alphabet, strict, caseless)?;
        Ok(Self {
            pt_alphabet: pt_alphabet.to_string(),
            ct_alphabet,
            tableau,
        })
    }
}

impl Cipher for MonoalphabeticCipher {
    fn encipher(&self, s: &str) -> String {
        self.tableau.encipher(s)
    }

    fn decipher(&self, s: &str) -> String {
        self.tableau.decipher(s)
    }

    fn tableau(&self) -> String {
        format!("{}\n{}", self.pt_alphabet, self.ct_alphabet)
    }
}

/// Explicit substitution: the caller supplies both alphabets.
pub fn simple(
    pt_alphabet: &str,
    ct_alphabet: &str,
    strict: bool,
    caseless: bool,
) -> Result<MonoalphabeticCipher, CipherError> {
    MonoalphabeticCipher::build(pt_alphabet, ct_alphabet.to_string(), strict, caseless)
}

/// Caesar cipher: the alphabet shifted by a fixed amount.
pub fn caesar(
    alphabet: &str,
    shift: i64,
    strict: bool,
    caseless: bool,
) -> Result<MonoalphabeticCipher, CipherError> {
    let ct = caesar_alphabet(alphabet, shift)?;
    MonoalphabeticCipher::build(alphabet, ct, strict, caseless)
}

/// Decimation cipher: positions multiplied by a constant coprime to the
/// alphabet length.
pub fn decimation(
    alphabet: &str,
    multiplier: i64,
    strict: bool,
    caseless: bool,
) -> Result<MonoalphabeticCipher, CipherError> {
    let ct = affine_alphabet(alphabet, multiplier, 0)?;
    MonoalphabeticCipher::build(alphabet, ct, strict, caseless)
}

/// Affine cipher: decimation plus a shift.
pub fn affine(
    alphabet: &str,
    slope: i64,
    intercept: i64,
    strict: bool,
    caseless: bool,
) -> Result<MonoalphabeticCipher, CipherError> {
    let ct = affine_alphabet(alphabet, slope, intercept)?;
    MonoalphabeticCipher::build(alphabet, ct, strict, caseless)
}

/// Atbash: the alphabet mirrored onto itself; its own inverse.
pub fn atbash(
    alphabet: &str,
    strict: bool,
    caseless: bool,
) -> Result<MonoalphabeticCipher, CipherError> {
    let ct = affine_alphabet(alphabet, -1, -1)?;
    MonoalphabeticCipher::build(alphabet, ct, strict, caseless)
}

/// Keyword cipher: the ciphertext alphabet starts with the deduplicated
/// keyword and continues with the unused alphabet runes.
pub fn keyword(
    alphabet: &str,
    keyword: &str,
    strict: bool,
    caseless: bool,
) -> Result<MonoalphabeticCipher, CipherError> {
    let mut combined = String::with_capacity(keyword.len() + alphabet.len());
    combined.push_str(keyword);
    combined.push_str(alphabet);
    MonoalphabeticCipher::build(alphabet, dedupe(&combined), strict, caseless)
}
