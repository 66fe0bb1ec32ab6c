use crate::cipher::CipherError;
use crate::translation::TranslationTable;

/// One plaintext/ciphertext alphabet pair.
///
/// Holds a forward and a backward [`TranslationTable`] that are exact
/// inverses of each other over the alphabet domain, plus the strict and
/// caseless lookup policy. Immutable; shared read-only by every operation
/// against it.
#[derive(Clone, Debug)]
pub struct Tableau {
    pt_to_ct: TranslationTable,
    ct_to_pt: TranslationTable,
    strict: bool,
    caseless: bool,
}

impl Tableau {
    pub fn new(
        pt_alphabet: &str,
        ct_alphabet: &str,
        strict: bool,
        caseless: bool,
    ) -> Result<Self, CipherError> {
        Ok(Self {
            pt_to_ct: TranslationTable::new(pt_alphabet, ct_alphabet, "")?,
            ct_to_pt: TranslationTable::new(ct_alphabet, pt_alphabet, "")?,
            strict,
            caseless,
        })
    }

    pub fn encipher_rune(&self, r: char) -> (Option<char>, bool) {
        self.pt_to_ct.get(r, self.strict, self.caseless)
    }

    pub fn decipher_rune(&self, r: char) -> (Option<char>, bool) {
        self.ct_to_pt.get(r, self.strict, self.caseless)
    }

    pub fn encipher(&self, s: &str) -> String {
        self.pt_to_ct.translate(s, self.strict, self.caseless)
    }

    pub fn decipher(&self, s: &str) -> String {
        self.ct_to_pt.translate(s, self.strict, self.caseless)
    }
}
