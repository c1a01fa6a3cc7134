//! # Wordle Assist
//!
//! Constraint filtering and guess ranking for Wordle-style puzzles.
//!
//! A frequency-weighted corpus is narrowed to the words compatible with what
//! the board has revealed so far, and the next guesses are ranked either by a
//! cheap letter-coverage heuristic (large pools) or by the frequency-weighted
//! entropy of the feedback they would produce (small pools).

pub mod board;
pub mod constraint;
pub mod corpus;
pub mod distribution;
pub mod feedback;
pub mod filter;
pub mod mask;
pub mod remaining;
pub mod report;
pub mod scorer;
pub mod solver;

pub use board::{Board, BoardConstraints, BoardError, CellState};
pub use constraint::{format_misplaced, parse_misplaced, parse_pattern, Constraint, Misplaced};
pub use corpus::{load_cached, Corpus, CorpusError, WordEntry};
pub use distribution::Distribution;
pub use feedback::{feedback_pattern, Feedback, FeedbackPattern};
pub use filter::{filter_all, passes, Candidate};
pub use mask::LetterMask;
pub use remaining::{find_from_remaining_letters, RemainingWord};
pub use report::{save_results, write_results};
pub use scorer::{coverage_score, weighted_entropy, Strategy};
pub use solver::{rank, RankOptions, RankedGuess, WordleSolver};

/// Pool size at or below which guesses are ranked by weighted entropy.
pub const DEFAULT_CUTOFF: usize = 250;

/// Number of ranked guesses returned by default.
pub const DEFAULT_TOP_N: usize = 15;

/// Guesses allowed in a simulated game.
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Number of letters in the alphabet handled by the engine.
pub const ALPHABET_LEN: usize = 26;
