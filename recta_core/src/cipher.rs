use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("alphabet length mismatch: source has {source_len} runes, destination has {dest_len}")]
    AlphabetLengthMismatch { source_len: usize, dest_len: usize },

    #[error("slope {slope} is not coprime to alphabet length {modulus}")]
    SlopeNotCoprime { slope: i64, modulus: usize },

    #[error("alphabet length {0} is odd; an even length is required")]
    OddAlphabetLength(usize),

    #[error("text autoclave and key autoclave are mutually exclusive")]
    MutuallyExclusiveAutoclave,
}

/// Uniform transcoding contract shared by every cipher variant.
///
/// Construction is the only fallible step; a successfully built cipher
/// transcodes any message without error. Untranslatable runes are resolved
/// by the strict/caseless policy the cipher was built with.
pub trait Cipher {
    fn encipher(&self, s: &str) -> String;
    fn decipher(&self, s: &str) -> String;

    /// Human-readable rendering of the substitution alphabet(s).
    fn tableau(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_slope() {
        let err = CipherError::SlopeNotCoprime {
            slope: 13,
            modulus: 26,
        };
        assert_eq!(
            err.to_string(),
            "slope 13 is not coprime to alphabet length 26"
        );
    }

    #[test]
    fn error_display_mismatch() {
        let err = CipherError::AlphabetLengthMismatch {
            source_len: 26,
            dest_len: 25,
        };
        assert_eq!(
            err.to_string(),
            "alphabet length mismatch: source has 26 runes, destination has 25"
        );
    }

    #[test]
    fn error_equality() {
        assert_eq!(
            CipherError::MutuallyExclusiveAutoclave,
            CipherError::MutuallyExclusiveAutoclave
        );
        assert_ne!(
            CipherError::OddAlphabetLength(25),
            CipherError::OddAlphabetLength(27)
        );
    }
}
