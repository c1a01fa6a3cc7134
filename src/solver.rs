//! Guess ranking and the solver facade.
//!
//! [`rank`] picks a scoring strategy from the size of the candidate pool:
//! small pools are searched exhaustively with weighted entropy, restricted to
//! the candidates themselves; large pools are ranked by letter coverage over
//! every corpus word of the right length, which lets probe words that cannot
//! be the answer surface when they split the pool well.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::constraint::Constraint;
use crate::corpus::{load_cached, Corpus, CorpusError};
use crate::distribution::Distribution;
use crate::feedback::FeedbackPattern;
use crate::filter::{filter_all, Candidate};
use crate::mask::LetterMask;
use crate::remaining::{find_from_remaining_letters, RemainingWord};
use crate::scorer::Strategy;
use crate::{DEFAULT_CUTOFF, DEFAULT_TOP_N};

/// A scored guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess<'a> {
    pub word: &'a str,
    pub score: f64,
    /// Whether the guess is itself still a possible answer.
    pub is_candidate: bool,
}

/// Knobs for [`rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    /// Largest pool ranked by weighted entropy; `None` always uses entropy.
    pub cutoff: Option<usize>,
    pub top_n: usize,
    /// Probe words below this frequency are not considered.
    pub min_frequency: u64,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            cutoff: Some(DEFAULT_CUTOFF),
            top_n: DEFAULT_TOP_N,
            min_frequency: 0,
        }
    }
}

/// Rank next guesses for `pool`, best first, at most `options.top_n` of them.
///
/// Guesses with equal scores keep the order of the scored pool: candidate
/// order for entropy, corpus order for coverage.
pub fn rank<'a>(
    pool: &[Candidate<'a>],
    corpus: &'a Corpus,
    distribution: &Distribution,
    options: &RankOptions,
) -> Vec<RankedGuess<'a>> {
    let Some(first) = pool.first() else {
        return vec![];
    };
    let word_length = first.word.len();
    let strategy = Strategy::select(pool, distribution, options.cutoff);

    let guesses: Vec<&'a str> = match strategy {
        Strategy::WeightedEntropy(_) => pool.iter().map(|c| c.word).collect(),
        Strategy::Coverage(_) => corpus
            .iter()
            .filter(|e| e.len() == word_length && e.frequency() >= options.min_frequency)
            .map(|e| e.word())
            .collect(),
    };
    debug!(
        "ranking {} guesses by {} against {} candidates",
        guesses.len(),
        strategy.name(),
        pool.len()
    );

    let candidates: HashSet<&str> = pool.iter().map(|c| c.word).collect();
    let mut ranked: Vec<RankedGuess<'a>> = guesses
        .par_iter()
        .map(|&word| RankedGuess {
            word,
            score: strategy.score(word),
            is_candidate: candidates.contains(word),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(options.top_n);
    ranked
}

/// The engine entry points over one shared corpus.
#[derive(Debug, Clone)]
pub struct WordleSolver {
    corpus: Arc<Corpus>,
}

impl WordleSolver {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self { corpus }
    }

    /// Open the corpus at `path`, reusing the process-wide copy if this path
    /// was loaded before.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        load_cached(path).map(Self::new)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Corpus words matching the textual constraints, most frequent first.
    pub fn filter_words(
        &self,
        length: Option<usize>,
        pattern: &str,
        excluded: &str,
        misplaced: &str,
    ) -> Vec<Candidate<'_>> {
        let constraint = Constraint::new(length, pattern, excluded, misplaced);
        self.filter(&constraint)
    }

    pub fn filter(&self, constraint: &Constraint) -> Vec<Candidate<'_>> {
        filter_all(self.corpus.iter(), constraint)
    }

    pub fn compute_distributions(&self, results: &[Candidate<'_>]) -> Distribution {
        Distribution::aggregate(results)
    }

    pub fn best_guesses<'a>(
        &'a self,
        pool: &[Candidate<'a>],
        distribution: &Distribution,
        options: &RankOptions,
    ) -> Vec<RankedGuess<'a>> {
        rank(pool, &self.corpus, distribution, options)
    }

    /// Words built only from letters in neither `used` nor `excluded`.
    pub fn find_from_remaining_letters(
        &self,
        used: &str,
        excluded: &str,
        distribution: &Distribution,
        word_length: Option<usize>,
        min_frequency: u64,
    ) -> Vec<RemainingWord<'_>> {
        find_from_remaining_letters(
            &self.corpus,
            LetterMask::from_letters(used),
            LetterMask::from_letters(excluded),
            distribution,
            word_length,
            min_frequency,
        )
    }

    pub fn feedback_pattern(&self, guess: &str, answer: &str) -> String {
        crate::feedback::feedback_pattern(guess, answer)
    }

    /// Play against a known `target`: rank, guess the best word, keep only the
    /// candidates consistent with the feedback, and repeat.
    ///
    /// Stops on a win, when nothing is left to guess, or after `max_turns`
    /// guesses. Returns the guesses made with their feedback.
    pub fn solve_for_target(
        &self,
        target: &str,
        options: &RankOptions,
        max_turns: usize,
    ) -> Vec<(String, FeedbackPattern)> {
        let target = target.to_ascii_lowercase();
        let mut pool = self.filter(&Constraint::with_length(target.len()));
        let mut guesses = Vec::new();

        for _ in 0..max_turns {
            let distribution = Distribution::aggregate(&pool);
            let best = match rank(&pool, &self.corpus, &distribution, options).first() {
                Some(g) => g.word,
                None => break,
            };

            let pattern = FeedbackPattern::calculate(best, &target);
            let won = pattern.is_win();
            pool.retain(|c| FeedbackPattern::calculate(best, c.word) == pattern);
            guesses.push((best.to_string(), pattern));

            if won {
                break;
            }
        }

        guesses
    }
}
