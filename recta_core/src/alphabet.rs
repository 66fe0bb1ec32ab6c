//! Named alphabet defaults and rune-level helpers.
//!
//! Every function here iterates by code point, never by byte offset, so
//! non-Latin alphabets work the same as the default one.

/// The 26-letter Latin uppercase alphabet, the default when a request
/// supplies none.
pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Key alphabet for the Gronsfeld cipher.
pub const DIGITS: &str = "0123456789";

/// Removes duplicate runes, keeping the first occurrence of each.
///
/// Keyword alphabets are built by prepending a keyword to a base alphabet
/// and deduplicating the result.
pub fn dedupe(s: &str) -> String {
    let mut seen = Vec::new();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if !seen.contains(&c) {
            seen.push(c);
            out.push(c);
        }
    }
    out
}

/// Returns the alphabet with its runes in reverse order.
pub fn reversed(s: &str) -> String {
    s.chars().rev().collect()
}

/// Rotates the alphabet left by `n` positions.
pub fn rotated(s: &str, n: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let n = n % chars.len();
    chars[n..].iter().chain(chars[..n].iter()).collect()
}

/// Upper-cases a single rune. Multi-rune expansions keep the first rune.
pub fn upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Lower-cases a single rune. Multi-rune expansions keep the first rune.
pub fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
