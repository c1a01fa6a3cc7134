//! Dense 26-bit letter sets.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not, Sub};

use crate::ALPHABET_LEN;

/// A set of letters, one bit per letter (`a` = bit 0 ... `z` = bit 25).
///
/// Only membership is tracked: a word with a repeated letter sets the same
/// bit once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterMask(u32);

impl LetterMask {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self((1 << ALPHABET_LEN) - 1);

    /// Index of an ASCII letter in the alphabet, folding case.
    pub fn letter_index(c: u8) -> Option<usize> {
        let c = c.to_ascii_lowercase();
        c.is_ascii_lowercase().then(|| (c - b'a') as usize)
    }

    /// The single-bit mask for `c`, or the empty mask for a non-letter.
    pub fn of_letter(c: u8) -> Self {
        match Self::letter_index(c) {
            Some(idx) => Self(1 << idx),
            None => Self::EMPTY,
        }
    }

    /// Mask of every letter in `text`. Non-letters are ignored.
    pub fn from_letters(text: &str) -> Self {
        text.bytes()
            .fold(Self::EMPTY, |mask, c| mask | Self::of_letter(c))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, c: u8) -> bool {
        let bit = Self::of_letter(c);
        !bit.is_empty() && self.0 & bit.0 != 0
    }

    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_subset_of(self, other: Self) -> bool {
        self.0 & other.0 == self.0
    }

    pub fn insert(&mut self, c: u8) {
        self.0 |= Self::of_letter(c).0;
    }

    pub fn remove(&mut self, c: u8) {
        self.0 &= !Self::of_letter(c).0;
    }

    /// Number of distinct letters in the set.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Alphabet indices of the letters in the set, ascending.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        (0..ALPHABET_LEN).filter(move |&i| self.0 & (1 << i) != 0)
    }

    /// Letters in the set, ascending.
    pub fn letters(self) -> impl Iterator<Item = char> {
        self.indices().map(|i| (b'a' + i as u8) as char)
    }
}

impl BitOr for LetterMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for LetterMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Sub for LetterMask {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }
}

impl Not for LetterMask {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }
}

impl FromIterator<u8> for LetterMask {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |mask, c| mask | Self::of_letter(c))
    }
}

impl fmt::Display for LetterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.letters() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popcount_matches_distinct_letters() {
        assert_eq!(LetterMask::from_letters("apple").count(), 4);
        assert_eq!(LetterMask::from_letters("aaaaa").count(), 1);
        assert_eq!(LetterMask::from_letters("").count(), 0);
    }

    #[test]
    fn folds_case_and_ignores_non_letters() {
        assert_eq!(
            LetterMask::from_letters("ApE-1!"),
            LetterMask::from_letters("ape")
        );
    }

    #[test]
    fn complement_stays_in_alphabet() {
        let mask = !LetterMask::from_letters("abc");
        assert_eq!(mask.count(), 23);
        assert!(!mask.contains(b'a'));
        assert!(mask.contains(b'z'));
        assert_eq!(!LetterMask::EMPTY, LetterMask::ALL);
    }

    #[test]
    fn subset_and_difference() {
        let available = LetterMask::ALL - LetterMask::from_letters("xyz");
        assert!(LetterMask::from_letters("apple").is_subset_of(available));
        assert!(!LetterMask::from_letters("fizzy").is_subset_of(available));
    }

    #[test]
    fn display_lists_letters_in_order() {
        assert_eq!(LetterMask::from_letters("crane").to_string(), "acenr");
    }
}
