use std::collections::HashMap;

use crate::alphabet::{lower, upper};
use crate::cipher::CipherError;

/// Positional rune-to-rune map built by zipping two equal-length alphabets.
///
/// An optional deletion set marks runes that are recognized but produce no
/// output. Immutable once constructed.
#[derive(Clone, Debug)]
pub struct TranslationTable {
    map: HashMap<char, Option<char>>,
}

impl TranslationTable {
    /// Zips `src` and `dst` rune-for-rune; runes in `del` map to no output.
    pub fn new(src: &str, dst: &str, del: &str) -> Result<Self, CipherError> {
        let src_chars: Vec<char> = src.chars().collect();
        let dst_chars: Vec<char> = dst.chars().collect();
        if src_chars.len() != dst_chars.len() {
            return Err(CipherError::AlphabetLengthMismatch {
                source_len: src_chars.len(),
                dest_len: dst_chars.len(),
            });
        }
        let mut map = HashMap::with_capacity(src_chars.len());
        for (s, d) in src_chars.into_iter().zip(dst_chars) {
            map.insert(s, Some(d));
        }
        for c in del.chars() {
            map.insert(c, None);
        }
        Ok(Self { map })
    }

    /// Resolves one rune.
    ///
    /// Returns the output rune (`None` when the rune produces no output)
    /// and whether the table recognized it. A caseless miss retries the
    /// upper-cased rune and then the lower-cased one; a hit through the
    /// fold returns its result folded the opposite way, mirroring the
    /// case of the original query. An unrecognized rune is dropped under
    /// strict policy and passed through unchanged otherwise.
    pub fn get(&self, r: char, strict: bool, caseless: bool) -> (Option<char>, bool) {
        if let Some(&hit) = self.map.get(&r) {
            return (hit, true);
        }
        if caseless {
            let up = upper(r);
            if up != r {
                if let Some(&hit) = self.map.get(&up) {
                    return (hit.map(lower), true);
                }
            }
            let lo = lower(r);
            if lo != r {
                if let Some(&hit) = self.map.get(&lo) {
                    return (hit.map(upper), true);
                }
            }
        }
        if strict {
            (None, false)
        } else {
            (Some(r), false)
        }
    }

    /// Applies [`get`](Self::get) to every rune of `s` independently,
    /// preserving order and suppressing runes with no output.
    pub fn translate(&self, s: &str, strict: bool, caseless: bool) -> String {
        let mut out = String::with_capacity(s.len());
        for r in s.chars() {
            if let (Some(o), _) = self.get(r, strict, caseless) {
                out.push(o);
            }
        }
        out
    }
}
