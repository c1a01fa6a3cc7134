//! Guess scoring strategies.
//!
//! Weighted entropy is the expected information, in bits, that a guess
//! reveals about an answer drawn from the candidate pool with probability
//! proportional to its frequency. It costs one feedback computation per
//! (guess, answer) pair, so it is only used once the pool is small. Coverage
//! is the cheap stand-in for large pools: it rewards guesses whose distinct
//! letters carry a lot of frequency mass in the pool.

use std::collections::HashMap;

use crate::distribution::Distribution;
use crate::feedback::FeedbackPattern;
use crate::filter::Candidate;
use crate::mask::LetterMask;

/// Sum of overall letter weights over the distinct letters of `word`.
pub fn coverage_score(word: &str, distribution: &Distribution) -> u64 {
    distribution.mass_of(LetterMask::from_letters(word))
}

/// Shannon entropy (bits) of the feedback patterns `guess` produces over
/// `pool`, each answer weighted by its frequency.
///
/// Returns 0 when the pool carries no frequency mass.
pub fn weighted_entropy(guess: &str, pool: &[Candidate<'_>]) -> f64 {
    let total_mass: u128 = pool.iter().map(|c| u128::from(c.frequency)).sum();
    if total_mass == 0 {
        return 0.0;
    }

    let mut pattern_mass: HashMap<FeedbackPattern, u128> = HashMap::new();
    for answer in pool {
        let pattern = FeedbackPattern::calculate(guess, answer.word);
        *pattern_mass.entry(pattern).or_insert(0) += u128::from(answer.frequency);
    }

    let total = total_mass as f64;
    let mut entropy = 0.0;
    for &mass in pattern_mass.values() {
        if mass > 0 {
            let p = mass as f64 / total;
            entropy -= p * p.log2();
        }
    }

    entropy.max(0.0)
}

/// How guesses are scored for one ranking pass.
#[derive(Debug, Clone, Copy)]
pub enum Strategy<'s> {
    /// Letter coverage against the pool's letter distribution.
    Coverage(&'s Distribution),
    /// Weighted entropy against the candidate pool itself.
    WeightedEntropy(&'s [Candidate<'s>]),
}

impl<'s> Strategy<'s> {
    /// Entropy while the pool is within `cutoff` (or there is no cutoff),
    /// coverage beyond it.
    pub fn select(
        pool: &'s [Candidate<'s>],
        distribution: &'s Distribution,
        cutoff: Option<usize>,
    ) -> Self {
        match cutoff {
            Some(cutoff) if pool.len() > cutoff => Strategy::Coverage(distribution),
            _ => Strategy::WeightedEntropy(pool),
        }
    }

    pub fn score(&self, word: &str) -> f64 {
        match self {
            Strategy::Coverage(distribution) => coverage_score(word, distribution) as f64,
            Strategy::WeightedEntropy(pool) => weighted_entropy(word, pool),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Coverage(_) => "coverage",
            Strategy::WeightedEntropy(_) => "weighted entropy",
        }
    }
}
