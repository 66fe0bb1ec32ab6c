use std::collections::HashMap;

use log::debug;

use crate::alphabet::{lower, upper};
use crate::cipher::CipherError;
use crate::rows::RowShape;
use crate::tableau::Tableau;

/// A key-alphabet-indexed family of [`Tableau`]x: one substitution
/// alphabet per key rune.
///
/// Built once per cipher configuration and immutable afterward, so it can
/// be shared freely across concurrent transcoding calls.
#[derive(Clone, Debug)]
pub struct TabulaRecta {
    pt_alphabet: String,
    key_alphabet: String,
    rows: HashMap<char, Tableau>,
    caseless: bool,
}

impl TabulaRecta {
    /// Builds the table: for each rune `k` at position `i` of the key
    /// alphabet, row `i` is generated from the plaintext alphabet and
    /// stored under `k`. The key alphabet defaults to the plaintext
    /// alphabet. Fails if any row generation fails.
    pub fn new(
        pt_alphabet: &str,
        key_alphabet: Option<&str>,
        shape: RowShape,
        strict: bool,
        caseless: bool,
    ) -> Result<Self, CipherError> {
        let key_alphabet = key_alphabet.unwrap_or(pt_alphabet);
        let mut rows = HashMap::with_capacity(key_alphabet.chars().count());
        for (i, k) in key_alphabet.chars().enumerate() {
            let ct_alphabet = shape.generate(pt_alphabet, i)?;
            rows.insert(k, Tableau::new(pt_alphabet, &ct_alphabet, strict, caseless)?);
        }
        debug!("built {:?} tabula recta with {} rows", shape, rows.len());
        Ok(Self {
            pt_alphabet: pt_alphabet.to_string(),
            key_alphabet: key_alphabet.to_string(),
            rows,
            caseless,
        })
    }

    /// Resolves a key rune to its tableau, falling back to the
    /// upper-cased and then lower-cased rune when caseless.
    pub fn row(&self, k: char) -> Option<&Tableau> {
        if let Some(t) = self.rows.get(&k) {
            return Some(t);
        }
        if self.caseless {
            let up = upper(k);
            if up != k {
                if let Some(t) = self.rows.get(&up) {
                    return Some(t);
                }
            }
            let lo = lower(k);
            if lo != k {
                if let Some(t) = self.rows.get(&lo) {
                    return Some(t);
                }
            }
        }
        None
    }

    pub fn pt_alphabet(&self) -> &str {
        &self.pt_alphabet
    }

    pub fn key_alphabet(&self) -> &str {
        &self.key_alphabet
    }

    /// Renders the full grid: a header row with the plaintext alphabet,
    /// then one row per key rune with that row's enciphered alphabet.
    pub fn printable(&self) -> String {
        let mut out = String::new();
        out.push_str("    ");
        out.push_str(&self.pt_alphabet);
        for k in self.key_alphabet.chars() {
            if let Some(tableau) = self.rows.get(&k) {
                out.push('\n');
                out.push(k);
                out.push_str(" | ");
                out.push_str(&tableau.encipher(&self.pt_alphabet));
            }
        }
        out
    }
}
