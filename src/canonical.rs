//! Canonical level and level-set names.
//!
//! Level sets are referred to by user-entered and localized names; on disk
//! they must compare stably. `canonical_name` maps any non-empty string to
//! the alphabet `[a-z0-9_]`, one output character per Unicode scalar of the
//! input, so names that differ only in case, punctuation or script spacing
//! collapse to the same identifier.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

static NUMBER_PREFIX: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Error, PartialEq, Eq)]
#[error("level and level-set names must not be empty")]
pub struct EmptyName;

/// Returns the canonical form of a name.
///
/// ASCII uppercase becomes lowercase; ASCII lowercase, digits and `_` pass
/// through; every other scalar value (whitespace, punctuation, any
/// non-ASCII code point, astral-plane characters included) becomes exactly
/// one `_`. Idempotent over its own output.
pub fn canonical_name(name: &str) -> Result<String, EmptyName> {
    if name.is_empty() {
        return Err(EmptyName);
    }

    Ok(name
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            match c {
                'a'..='z' | '0'..='9' | '_' => c,
                _ => '_',
            }
        })
        .collect())
}

/// Strips one leading menu-ordering prefix of digits plus `_`
/// ("01_easy" -> "easy"). Names without such a prefix come back unchanged.
pub fn strip_number(name: &str) -> &str {
    let re = NUMBER_PREFIX.get_or_init(|| Regex::new("^[0-9]+_").expect("valid literal regex"));
    match re.find(name) {
        Some(m) => &name[m.end()..],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_canonical_name_of_simple_string_is_the_string() {
        for s in ["abcxyz", "c", "zya", "1z2a3"] {
            assert_eq!(canonical_name(s).unwrap(), s);
        }
    }

    #[test]
    fn test_empty_name_is_not_allowed() {
        assert_eq!(canonical_name(""), Err(EmptyName));
    }

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(canonical_name("abc xyz").unwrap(), "abc_xyz");
        assert_eq!(canonical_name(" a ").unwrap(), "_a_");
    }

    #[test]
    fn test_punctuation_becomes_underscores() {
        assert_eq!(canonical_name("abc,xyz?").unwrap(), "abc_xyz_");
    }

    #[test]
    fn test_upper_case_becomes_lower_case() {
        assert_eq!(canonical_name("AbcxYZ").unwrap(), "abcxyz");
    }

    #[test]
    fn test_unicode_becomes_one_underscore_per_scalar() {
        // U+1F4A9 is a surrogate pair in UTF-16 and 4 bytes in UTF-8,
        // but one scalar, so one underscore.
        assert_eq!(
            canonical_name("Pile of poo \u{1F4A9} is coo").unwrap(),
            "pile_of_poo___is_coo"
        );
        assert_eq!(
            canonical_name("Go to \u{5317}\u{4eac}\u{5e02}").unwrap(),
            "go_to____"
        );
    }

    #[test]
    fn test_canonical_name_is_idempotent() {
        for s in ["abc xyz", "AbcxYZ", "Pile of poo \u{1F4A9} is coo", "01_easy"] {
            let once = canonical_name(s).unwrap();
            assert_eq!(canonical_name(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_strip_number_removes_numeric_prefix() {
        assert_eq!(strip_number("01_easy"), "easy");
        assert_eq!(strip_number("123_hard_ones"), "hard_ones");
    }

    #[test]
    fn test_strip_number_leaves_other_names_alone() {
        assert_eq!(strip_number("easy"), "easy");
        assert_eq!(strip_number("easy_01"), "easy_01");
        assert_eq!(strip_number("01easy"), "01easy");
        assert_eq!(strip_number("_easy"), "_easy");
    }

    proptest! {
        #[test]
        fn canonical_output_stays_in_alphabet(s in ".+") {
            let out = canonical_name(&s).unwrap();
            prop_assert_eq!(out.chars().count(), s.chars().count());
            prop_assert!(out
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        }
    }
}
