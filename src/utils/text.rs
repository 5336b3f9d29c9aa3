//! Key and query normalization
//!
//! Both registration keys and queries pass through [`normalize`], so the
//! two sides of a lookup always agree on case folding.

use crate::index::error::{MatchError, MatchResult};

/// Lowercase `text` and decode it into Unicode code points
///
/// Fails with [`MatchError::InvalidEncoding`] if the bytes are not
/// well-formed UTF-8. Each code point is lowercased on its own with
/// `char::to_lowercase`, so folding never depends on the surrounding text:
/// `Σ` always becomes `σ`, and a substring of a key normalizes to a
/// substring of the normalized key.
pub fn normalize(text: impl AsRef<[u8]>) -> MatchResult<Vec<char>> {
    let text = std::str::from_utf8(text.as_ref()).map_err(|e| MatchError::InvalidEncoding {
        valid_up_to: e.valid_up_to(),
    })?;

    // ASCII fast path avoids the intermediate String
    if text.is_ascii() {
        return Ok(text.chars().map(|c| c.to_ascii_lowercase()).collect());
    }

    Ok(text.chars().flat_map(char::to_lowercase).collect())
}

/// Check whether `text` would be accepted by [`normalize`]
///
/// Lets callers tell "bad input" apart from "no match" before calling
/// `retrieve`, which reports both as an empty result.
pub fn is_well_formed(text: impl AsRef<[u8]>) -> bool {
    std::str::from_utf8(text.as_ref()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_ascii() {
        assert_eq!(normalize("HeLLo").unwrap(), vec!['h', 'e', 'l', 'l', 'o']);
    }

    #[test]
    fn test_decodes_code_points() {
        // "Ünï" is 3 code points but 6 bytes
        let chars = normalize("ÜNÏ").unwrap();
        assert_eq!(chars, vec!['ü', 'n', 'ï']);
    }

    #[test]
    fn test_empty() {
        assert!(normalize("").unwrap().is_empty());
    }

    #[test]
    fn test_sigma_folds_without_context() {
        // Word-final capital sigma still maps to plain σ (U+03C3)
        let chars = normalize("ΟΔΟΣ").unwrap();
        assert_eq!(chars, vec!['\u{3bf}', '\u{3b4}', '\u{3bf}', '\u{3c3}']);

        // A prefix folds exactly like the same code points inside the word
        let word = normalize("ΑΣΤΥ").unwrap();
        let prefix = normalize("ΑΣ").unwrap();
        assert_eq!(&word[..2], prefix.as_slice());
    }

    #[test]
    fn test_multi_char_lowercase() {
        // U+0130 lowercases to 'i' + combining dot above
        assert_eq!(normalize("İ").unwrap(), vec!['i', '\u{307}']);
    }

    #[test]
    fn test_invalid_utf8() {
        let err = normalize(b"ab\xffcd").unwrap_err();
        assert_eq!(err, MatchError::InvalidEncoding { valid_up_to: 2 });

        // Truncated multi-byte sequence
        assert!(normalize(&[0xC3u8][..]).is_err());
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed("plain"));
        assert!(is_well_formed("日本語"));
        assert!(!is_well_formed(b"\xc3\x28"));
    }
}
