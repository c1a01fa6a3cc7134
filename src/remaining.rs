//! Words spelled entirely from letters the board has not touched yet.

use crate::corpus::Corpus;
use crate::distribution::Distribution;
use crate::mask::LetterMask;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingWord<'a> {
    pub word: &'a str,
    pub frequency: u64,
    pub score: u64,
}

/// Corpus words whose letters all lie outside `used` and `excluded`, scored
/// by the distribution weight of their distinct letters, best first.
///
/// Only set membership is checked: a word needing two copies of an
/// available letter qualifies like one needing a single copy.
pub fn find_from_remaining_letters<'a>(
    corpus: &'a Corpus,
    used: LetterMask,
    excluded: LetterMask,
    distribution: &Distribution,
    word_length: Option<usize>,
    min_frequency: u64,
) -> Vec<RemainingWord<'a>> {
    let available = LetterMask::ALL - used - excluded;

    let mut words: Vec<RemainingWord<'a>> = corpus
        .iter()
        .filter(|e| word_length.map_or(true, |len| e.len() == len))
        .filter(|e| e.frequency() >= min_frequency)
        .filter(|e| e.mask().is_subset_of(available))
        .map(|e| RemainingWord {
            word: e.word(),
            frequency: e.frequency(),
            score: distribution.mass_of(e.mask()),
        })
        .collect();

    words.sort_by(|a, b| b.score.cmp(&a.score));
    words
}
