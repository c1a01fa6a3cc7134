//! Frequency-weighted letter counts over a result set.

use crate::filter::Candidate;
use crate::mask::LetterMask;
use crate::ALPHABET_LEN;

/// Weighted letter counts, overall and per position.
///
/// Each occurrence of a letter adds the word's frequency, so a word with a
/// repeated letter contributes once per occurrence. Counts saturate at
/// `u64::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    overall: [u64; ALPHABET_LEN],
    positional: Vec<[u64; ALPHABET_LEN]>,
}

impl Distribution {
    /// Aggregate counts over `results`. All words are expected to share one
    /// length; an empty result set yields no positions at all.
    pub fn aggregate(results: &[Candidate<'_>]) -> Self {
        let mut dist = Self::default();
        let Some(first) = results.first() else {
            return dist;
        };
        dist.positional = vec![[0; ALPHABET_LEN]; first.word.len()];

        for candidate in results {
            let word = candidate.word.as_bytes();
            if word.len() > dist.positional.len() {
                dist.positional.resize(word.len(), [0; ALPHABET_LEN]);
            }
            for (i, &c) in word.iter().enumerate() {
                if let Some(idx) = LetterMask::letter_index(c) {
                    let overall = &mut dist.overall[idx];
                    *overall = overall.saturating_add(candidate.frequency);
                    let positional = &mut dist.positional[i][idx];
                    *positional = positional.saturating_add(candidate.frequency);
                }
            }
        }
        dist
    }

    /// Weighted count of `letter` across all positions.
    pub fn overall(&self, letter: u8) -> u64 {
        LetterMask::letter_index(letter).map_or(0, |idx| self.overall[idx])
    }

    pub fn overall_counts(&self) -> &[u64; ALPHABET_LEN] {
        &self.overall
    }

    /// Weighted counts at `position`, if the result set had that many letters.
    pub fn positional(&self, position: usize) -> Option<&[u64; ALPHABET_LEN]> {
        self.positional.get(position)
    }

    pub fn positions(&self) -> usize {
        self.positional.len()
    }

    /// Summed overall weight of the letters in `mask`, each counted once.
    pub fn mass_of(&self, mask: LetterMask) -> u64 {
        mask.indices().fold(0u64, |mass, idx| mass.saturating_add(self.overall[idx]))
    }

    /// Letters with non-zero weight, heaviest first, alphabetical on ties.
    pub fn ranked_letters(&self) -> Vec<(char, u64)> {
        let mut letters: Vec<(char, u64)> = self
            .overall
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(idx, &count)| ((b'a' + idx as u8) as char, count))
            .collect();
        letters.sort_by(|a, b| b.1.cmp(&a.1));
        letters
    }
}
