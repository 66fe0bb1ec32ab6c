use serde::{Deserialize, Serialize};

use crate::alphabet::rotated;
use crate::cipher::CipherError;
use crate::lcg::Lcg;

/// Row-generation strategy for one tabula recta variant.
///
/// Each strategy is a pure function from a base alphabet and a row index
/// to that row's ciphertext alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowShape {
    Vigenere,
    Beaufort,
    VariantBeaufort,
    Gronsfeld,
    DellaPorta,
    Trithemius,
}

impl RowShape {
    /// Generates the ciphertext alphabet for row `row` of the table.
    pub fn generate(self, base: &str, row: usize) -> Result<String, CipherError> {
        match self {
            RowShape::Beaufort => affine_alphabet(base, -1, row as i64),
            RowShape::DellaPorta => porta_alphabet(base, row),
            // Vigenère, Gronsfeld and Trithemius rows are plain Caesar
            // shifts; variant Beaufort rows are Caesar shifts of the
            // reversed base alphabet the caller supplies.
            RowShape::Vigenere
            | RowShape::VariantBeaufort
            | RowShape::Gronsfeld
            | RowShape::Trithemius => caesar_alphabet(base, row as i64),
        }
    }
}

/// Caesar shift: rotates `base` left by `shift` positions.
pub fn caesar_alphabet(base: &str, shift: i64) -> Result<String, CipherError> {
    affine_alphabet(base, 1, shift)
}

/// Affine transform of alphabet positions: `i -> (slope * i + intercept) mod m`.
///
/// Slope and intercept are normalized into `[0, m)` by repeated addition of
/// `m` while negative. A slope sharing a factor with `m` would collapse the
/// permutation and is rejected. The index sequence is drawn from an [`Lcg`]
/// with multiplier 1, increment `slope` and seed `intercept`, which visits
/// every residue exactly once for a coprime slope.
pub fn affine_alphabet(base: &str, slope: i64, intercept: i64) -> Result<String, CipherError> {
    let chars: Vec<char> = base.chars().collect();
    let m = chars.len();
    if m == 0 {
        return Ok(String::new());
    }
    let span = m as i64;
    let mut s = slope;
    while s < 0 {
        s += span;
    }
    let mut b = intercept;
    while b < 0 {
        b += span;
    }
    let s = (s % span) as u64;
    if gcd(s, m as u64) != 1 {
        return Err(CipherError::SlopeNotCoprime { slope, modulus: m });
    }
    let indices = Lcg::new(m as u64, 1, s, b as u64);
    Ok(indices.take(m).map(|i| chars[i as usize]).collect())
}

/// Della Porta "gear" row: the two halves of the alphabet counter-rotate.
///
/// The output is the second half rotated left by `row / 2` followed by the
/// first half rotated left by `half - row / 2`. Rows `2k` and `2k + 1`
/// coincide, and every row pairs each rune with its own image, so the
/// resulting substitution is an involution.
pub fn porta_alphabet(base: &str, row: usize) -> Result<String, CipherError> {
    let chars: Vec<char> = base.chars().collect();
    let m = chars.len();
    if m % 2 != 0 {
        return Err(CipherError::OddAlphabetLength(m));
    }
    if m == 0 {
        return Ok(String::new());
    }
    let half = m / 2;
    let p = (row / 2) % half;
    let first: String = chars[..half].iter().collect();
    let second: String = chars[half..].iter().collect();
    let mut out = rotated(&second, p);
    out.push_str(&rotated(&first, half - p));
    Ok(out)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
