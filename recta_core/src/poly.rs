use log::debug;
use serde::{Deserialize, Serialize};

use crate::alphabet::{reversed, DIGITS};
use crate::cipher::{Cipher, CipherError};
use crate::rows::RowShape;
use crate::tabula::TabulaRecta;

/// Keystream extension mode.
///
/// `Text` appends plaintext runes to the keystream as transcoding
/// proceeds, `Key` appends ciphertext runes; either way the key never
/// repeats once the message outgrows it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Autoclave {
    #[default]
    None,
    Text,
    Key,
}

impl Autoclave {
    /// Resolves the two request-layer flags, rejecting the combination.
    pub fn from_flags(text: bool, key: bool) -> Result<Self, CipherError> {
        match (text, key) {
            (true, true) => Err(CipherError::MutuallyExclusiveAutoclave),
            (true, false) => Ok(Autoclave::Text),
            (false, true) => Ok(Autoclave::Key),
            (false, false) => Ok(Autoclave::None),
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Encipher,
    Decipher,
}

/// Growable keystream local to a single transcoding call.
///
/// The cursor counts successfully transcoded runes only; a failed lookup
/// leaves both the cursor and the stream untouched.
struct Keystream {
    runes: Vec<char>,
    transcoded: usize,
}

impl Keystream {
    fn new(key: &str) -> Self {
        Self {
            runes: key.chars().collect(),
            transcoded: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    fn len(&self) -> usize {
        self.runes.len()
    }

    /// The key rune governing the next transcode.
    fn current(&self) -> char {
        self.runes[self.transcoded % self.runes.len()]
    }

    /// Records one successful transcode, optionally appending a rune.
    fn advance(&mut self, extension: Option<char>) {
        self.transcoded += 1;
        if let Some(r) = extension {
            self.runes.push(r);
        }
    }
}

/// A polyalphabetic substitution cipher: a tabula recta walked by a
/// keystream cursor, with optional autoclave feedback.
#[derive(Clone, Debug)]
pub struct PolyalphabeticCipher {
    tabula: TabulaRecta,
    key: String,
    autoclave: Autoclave,
}

impl PolyalphabeticCipher {
    pub fn new(tabula: TabulaRecta, key: &str, autoclave: Autoclave) -> Self {
        Self {
            tabula,
            key: key.to_string(),
            autoclave,
        }
    }

    pub fn tabula(&self) -> &TabulaRecta {
        &self.tabula
    }

    fn transcode(&self, s: &str, direction: Direction) -> String {
        // An empty key transcodes nothing; the message comes back as-is.
        if self.key.is_empty() {
            return s.to_string();
        }
        let mut keystream = Keystream::new(&self.key);
        let mut out = String::with_capacity(s.len());
        for r in s.chars() {
            let k = keystream.current();
            let Some(tableau) = self.tabula.row(k) else {
                // Key rune outside the key alphabet: this position emits
                // nothing and the cursor holds. The loop is driven by the
                // message, so an all-invalid key still terminates.
                continue;
            };
            let (o, ok) = match direction {
                Direction::Encipher => tableau.encipher_rune(r),
                Direction::Decipher => tableau.decipher_rune(r),
            };
            match (o, ok) {
                (Some(o), true) => {
                    out.push(o);
                    let extension = match (self.autoclave, direction) {
                        (Autoclave::None, _) => None,
                        // the plaintext rune: the input when enciphering,
                        // the recovered output when deciphering
                        (Autoclave::Text, Direction::Encipher) => Some(r),
                        (Autoclave::Text, Direction::Decipher) => Some(o),
                        // the ciphertext rune: the output when enciphering,
                        // the given input when deciphering
                        (Autoclave::Key, Direction::Encipher) => Some(o),
                        (Autoclave::Key, Direction::Decipher) => Some(r),
                    };
                    keystream.advance(extension);
                }
                (Some(passthrough), false) => out.push(passthrough),
                // strict drop, or a recognized rune with no output
                _ => {}
            }
        }
        debug!(
            "transcoded {} runes, keystream grew to {}",
            out.chars().count(),
            keystream.len()
        );
        out
    }
}

impl Cipher for PolyalphabeticCipher {
    fn encipher(&self, s: &str) -> String {
        self.transcode(s, Direction::Encipher)
    }

    fn decipher(&self, s: &str) -> String {
        self.transcode(s, Direction::Decipher)
    }

    fn tableau(&self) -> String {
        self.tabula.printable()
    }
}

/// Vigenère cipher: row `i` is the alphabet rotated left by `i`.
pub fn vigenere(
    alphabet: &str,
    key: &str,
    autoclave: Autoclave,
    strict: bool,
    caseless: bool,
) -> Result<PolyalphabeticCipher, CipherError> {
    let tabula = TabulaRecta::new(alphabet, None, RowShape::Vigenere, strict, caseless)?;
    Ok(PolyalphabeticCipher::new(tabula, key, autoclave))
}

/// Beaufort cipher: rows run backward, making each row self-inverse.
pub fn beaufort(
    alphabet: &str,
    key: &str,
    autoclave: Autoclave,
    strict: bool,
    caseless: bool,
) -> Result<PolyalphabeticCipher, CipherError> {
    let tabula = TabulaRecta::new(alphabet, None, RowShape::Beaufort, strict, caseless)?;
    Ok(PolyalphabeticCipher::new(tabula, key, autoclave))
}

/// Variant Beaufort: rows are built over the reversed alphabet while the
/// key alphabet stays unreversed, swapping the encipher and decipher
/// directions relative to Vigenère.
pub fn variant_beaufort(
    alphabet: &str,
    key: &str,
    autoclave: Autoclave,
    strict: bool,
    caseless: bool,
) -> Result<PolyalphabeticCipher, CipherError> {
    let rev = reversed(alphabet);
    let tabula = TabulaRecta::new(
        &rev,
        Some(alphabet),
        RowShape::VariantBeaufort,
        strict,
        caseless,
    )?;
    Ok(PolyalphabeticCipher::new(tabula, key, autoclave))
}

/// Gronsfeld cipher: a Vigenère keyed by digits, each shifting by its value.
pub fn gronsfeld(
    alphabet: &str,
    key: &str,
    autoclave: Autoclave,
    strict: bool,
    caseless: bool,
) -> Result<PolyalphabeticCipher, CipherError> {
    let tabula = TabulaRecta::new(alphabet, Some(DIGITS), RowShape::Gronsfeld, strict, caseless)?;
    Ok(PolyalphabeticCipher::new(tabula, key, autoclave))
}

/// Della Porta cipher: geared half-alphabet rows; enciphering and
/// deciphering are the same operation.
pub fn della_porta(
    alphabet: &str,
    key: &str,
    autoclave: Autoclave,
    strict: bool,
    caseless: bool,
) -> Result<PolyalphabeticCipher, CipherError> {
    let tabula = TabulaRecta::new(alphabet, None, RowShape::DellaPorta, strict, caseless)?;
    Ok(PolyalphabeticCipher::new(tabula, key, autoclave))
}

/// Trithemius cipher: self-keying, the alphabet itself is the key.
pub fn trithemius(
    alphabet: &str,
    autoclave: Autoclave,
    strict: bool,
    caseless: bool,
) -> Result<PolyalphabeticCipher, CipherError> {
    let tabula = TabulaRecta::new(alphabet, None, RowShape::Trithemius, strict, caseless)?;
    Ok(PolyalphabeticCipher::new(tabula, alphabet, autoclave))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::LATIN;

    #[test]
    fn autoclave_flags_resolve() {
        assert_eq!(Autoclave::from_flags(false, false), Ok(Autoclave::None));
        assert_eq!(Autoclave::from_flags(true, false), Ok(Autoclave::Text));
        assert_eq!(Autoclave::from_flags(false, true), Ok(Autoclave::Key));
        assert_eq!(
            Autoclave::from_flags(true, true),
            Err(CipherError::MutuallyExclusiveAutoclave)
        );
    }

    #[test]
    fn keystream_grows_only_on_success() {
        let mut ks = Keystream::new("KEY");
        assert_eq!(ks.len(), 3);
        assert_eq!(ks.current(), 'K');
        ks.advance(Some('A'));
        assert_eq!(ks.len(), 4);
        assert_eq!(ks.current(), 'E');
        ks.advance(None);
        assert_eq!(ks.len(), 4);
        assert_eq!(ks.current(), 'Y');
    }

    #[test]
    fn keystream_wraps_then_reaches_extensions() {
        let mut ks = Keystream::new("AB");
        for c in "WXYZ".chars() {
            ks.advance(Some(c));
        }
        // cursor 4, stream ABWXYZ: 4 % 6 -> Y
        assert_eq!(ks.current(), 'Y');
        assert_eq!(ks.len(), 6);
    }

    #[test]
    fn text_autoclave_growth_matches_successes() {
        let mut ks = Keystream::new("K");
        let n = 9;
        for _ in 0..n {
            ks.advance(Some('X'));
        }
        assert_eq!(ks.len(), 1 + n);
    }

    #[test]
    fn empty_key_returns_message_unchanged() {
        let cipher = vigenere(LATIN, "", Autoclave::None, true, false).unwrap();
        assert_eq!(cipher.encipher("HELLO, WORLD!"), "HELLO, WORLD!");
        assert_eq!(cipher.decipher("HELLO, WORLD!"), "HELLO, WORLD!");
    }

    #[test]
    fn unknown_key_runes_stall_without_looping() {
        // no rune of the key appears in the key alphabet
        let cipher = vigenere(LATIN, "123", Autoclave::None, false, false).unwrap();
        assert_eq!(cipher.encipher("HELLO"), "");
    }

    #[test]
    fn lax_mode_passes_foreign_runes_without_advancing() {
        let cipher = vigenere(LATIN, "AB", Autoclave::None, false, false).unwrap();
        // H+A=H, comma passes through without consuming 'B', E+B=F
        assert_eq!(cipher.encipher("H,E"), "H,F");
    }

    #[test]
    fn caseless_key_runes_resolve() {
        let cipher = vigenere(LATIN, "kangaroo", Autoclave::None, false, true).unwrap();
        assert_eq!(cipher.encipher("HELLO"), "REYRO");
    }

    #[test]
    fn trithemius_keys_itself() {
        let cipher = trithemius(LATIN, Autoclave::None, false, false).unwrap();
        // A+0, B+1, C+2 ...
        assert_eq!(cipher.encipher("AAAA"), "ABCD");
        assert_eq!(cipher.decipher("ABCD"), "AAAA");
    }

    #[test]
    fn gronsfeld_digits_shift_by_value() {
        let cipher = gronsfeld(LATIN, "31415", Autoclave::None, false, false).unwrap();
        assert_eq!(cipher.encipher("AAAAA"), "DBEBF");
    }

    #[test]
    fn variant_beaufort_subtracts_key() {
        let cipher = variant_beaufort(LATIN, "B", Autoclave::None, false, false).unwrap();
        // ct = pt - key
        assert_eq!(cipher.encipher("C"), "B");
        assert_eq!(cipher.decipher("B"), "C");
    }

    #[test]
    fn variant_beaufort_mirrors_vigenere() {
        let vig = vigenere(LATIN, "KANGAROO", Autoclave::None, false, false).unwrap();
        let var = variant_beaufort(LATIN, "KANGAROO", Autoclave::None, false, false).unwrap();
        let msg = "ATTACKATDAWN";
        assert_eq!(var.encipher(&vig.encipher(msg)), msg);
        assert_eq!(vig.decipher(msg), var.encipher(msg));
    }

    #[test]
    fn key_autoclave_roundtrip() {
        let cipher = vigenere(LATIN, "OCULAR", Autoclave::Key, false, false).unwrap();
        let ct = cipher.encipher("AUTOKEYS EXTEND, FOREVER!");
        assert_eq!(cipher.decipher(&ct), "AUTOKEYS EXTEND, FOREVER!");
    }
}
