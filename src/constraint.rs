//! Parsing board constraints from their compact text encoding.
//!
//! Three strings describe what is known about the answer:
//!
//! - a pattern such as `c_a__`, one character per position, `_` for unknown;
//! - the excluded letters, e.g. `xqz`;
//! - the misplaced letters with the 1-indexed positions they are known not
//!   to occupy, e.g. `a:1,3; e:2`.
//!
//! Parsing never fails. Anything that cannot be understood is dropped, which
//! only ever loosens the resulting constraint.

use std::collections::{BTreeMap, BTreeSet};

use crate::mask::LetterMask;

/// Misplaced letter → zero-indexed positions it must not occupy.
pub type Misplaced = BTreeMap<char, BTreeSet<usize>>;

/// Everything a word must satisfy to remain a candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraint {
    pub length: Option<usize>,
    /// Fixed lowercase letter per position, `None` for a wildcard.
    pub pattern: Vec<Option<u8>>,
    pub excluded: LetterMask,
    /// Every letter listed here must appear in the word somewhere.
    pub misplaced: Misplaced,
}

impl Constraint {
    pub fn new(length: Option<usize>, pattern: &str, excluded: &str, misplaced: &str) -> Self {
        Self {
            length,
            pattern: parse_pattern(pattern),
            excluded: LetterMask::from_letters(excluded),
            misplaced: parse_misplaced(misplaced),
        }
    }

    /// A constraint that accepts every word of `length`.
    pub fn with_length(length: usize) -> Self {
        Self {
            length: Some(length),
            ..Self::default()
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.length.is_none()
            && self.pattern.iter().all(Option::is_none)
            && self.excluded.is_empty()
            && self.misplaced.is_empty()
    }
}

/// Parse a positional pattern. Letters are fixed (case-folded); `_` and any
/// other non-letter character is a wildcard.
pub fn parse_pattern(pattern: &str) -> Vec<Option<u8>> {
    pattern
        .trim()
        .bytes()
        .map(|c| c.is_ascii_alphabetic().then(|| c.to_ascii_lowercase()))
        .collect()
}

/// Parse `letter:pos[,pos...]; letter:pos...` into zero-indexed forbidden
/// positions.
///
/// Entries without a `:` or without a single letter before it are ignored.
/// Position tokens that are not positive integers are skipped. A letter named
/// in several entries gets the union of their positions.
pub fn parse_misplaced(text: &str) -> Misplaced {
    let mut misplaced = Misplaced::new();
    for entry in text.split(';') {
        let Some((letter, positions)) = entry.split_once(':') else {
            continue;
        };
        let mut chars = letter.trim().chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            continue;
        };
        if !letter.is_ascii_alphabetic() {
            continue;
        }
        let forbidden = positions
            .split(',')
            .filter_map(|p| p.trim().parse::<usize>().ok())
            .filter_map(|p| p.checked_sub(1));
        misplaced
            .entry(letter.to_ascii_lowercase())
            .or_default()
            .extend(forbidden);
    }
    misplaced
}

/// Render misplaced letters back into the text encoding, 1-indexed.
pub fn format_misplaced(misplaced: &Misplaced) -> String {
    misplaced
        .iter()
        .map(|(letter, positions)| {
            let positions: Vec<String> = positions.iter().map(|p| (p + 1).to_string()).collect();
            format!("{}:{}", letter, positions.join(","))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(positions: &[usize]) -> BTreeSet<usize> {
        positions.iter().copied().collect()
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(parse_misplaced("").is_empty());
        assert!(parse_misplaced("   ").is_empty());
    }

    #[test]
    fn converts_to_zero_indexed() {
        let parsed = parse_misplaced("a:1,3");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[&'a'], set(&[0, 2]));
    }

    #[test]
    fn tolerates_whitespace_and_case() {
        let parsed = parse_misplaced(" A : 1 , 3 ; b:2 ");
        assert_eq!(parsed[&'a'], set(&[0, 2]));
        assert_eq!(parsed[&'b'], set(&[1]));
    }

    #[test]
    fn skips_garbage_tokens() {
        assert_eq!(parse_misplaced("a:1,foo,3")[&'a'], set(&[0, 2]));
        assert_eq!(parse_misplaced("a:0,2")[&'a'], set(&[1]));
        assert!(parse_misplaced("a1;ab:2;1:3").is_empty());
    }

    #[test]
    fn unions_repeated_letters() {
        assert_eq!(parse_misplaced("a:1;a:3")[&'a'], set(&[0, 2]));
    }

    #[test]
    fn letter_without_usable_positions_is_still_required() {
        let parsed = parse_misplaced("e:");
        assert_eq!(parsed[&'e'], set(&[]));
    }

    #[test]
    fn format_round_trips() {
        let text = "a:1,3; e:2";
        assert_eq!(format_misplaced(&parse_misplaced(text)), text);
    }

    #[test]
    fn pattern_wildcards() {
        assert_eq!(
            parse_pattern("C_a?_"),
            vec![Some(b'c'), None, Some(b'a'), None, None]
        );
    }
}
