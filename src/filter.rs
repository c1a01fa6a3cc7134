//! Narrowing the corpus to the words compatible with a [`Constraint`].

use crate::constraint::Constraint;
use crate::corpus::WordEntry;

/// A word that survived filtering, with its corpus frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub word: &'a str,
    pub frequency: u64,
}

impl<'a> Candidate<'a> {
    pub fn new(word: &'a str, frequency: u64) -> Self {
        Self { word, frequency }
    }
}

impl<'a> From<&'a WordEntry> for Candidate<'a> {
    fn from(entry: &'a WordEntry) -> Self {
        Self::new(entry.word(), entry.frequency())
    }
}

/// Check a single entry against the constraint, cheapest tests first.
pub fn passes(entry: &WordEntry, constraint: &Constraint) -> bool {
    let word = entry.word().as_bytes();

    if constraint.length.is_some_and(|len| len != word.len()) {
        return false;
    }

    if entry.mask().intersects(constraint.excluded) {
        return false;
    }

    for (i, fixed) in constraint.pattern.iter().enumerate() {
        if let Some(c) = fixed {
            if word.get(i) != Some(c) {
                return false;
            }
        }
    }

    for (&letter, forbidden) in &constraint.misplaced {
        let letter = letter as u8;
        if !entry.mask().contains(letter) {
            return false;
        }
        if forbidden.iter().any(|&pos| word.get(pos) == Some(&letter)) {
            return false;
        }
    }

    true
}

/// Filter `entries`, most frequent first. Entries of equal frequency keep
/// their corpus order.
pub fn filter_all<'a, I>(entries: I, constraint: &Constraint) -> Vec<Candidate<'a>>
where
    I: IntoIterator<Item = &'a WordEntry>,
{
    let mut results: Vec<Candidate<'a>> = entries
        .into_iter()
        .filter(|entry| passes(entry, constraint))
        .map(Candidate::from)
        .collect();
    results.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> WordEntry {
        WordEntry::new(word, 1).unwrap()
    }

    #[test]
    fn pattern_longer_than_word_rejects_fixed_tail() {
        let constraint = Constraint::new(None, "ab_d", "", "");
        assert!(!passes(&entry("abc"), &constraint));
        assert!(passes(&entry("abed"), &constraint));
    }

    #[test]
    fn trailing_wildcards_are_ignored() {
        let constraint = Constraint::new(None, "a____", "", "");
        assert!(passes(&entry("ab"), &constraint));
    }

    #[test]
    fn forbidden_positions_past_the_end_are_ignored() {
        let constraint = Constraint::new(None, "", "", "a:9");
        assert!(passes(&entry("cat"), &constraint));
    }

    #[test]
    fn misplaced_letter_must_be_present() {
        let constraint = Constraint::new(Some(5), "", "", "z:1");
        assert!(!passes(&entry("crane"), &constraint));
        assert!(passes(&entry("crazy"), &constraint));
    }
}
