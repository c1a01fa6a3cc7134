//! The board of colored guess rows, and the constraints it implies.
//!
//! A row is a guessed word with a state per letter. Green cells pin a letter
//! to a position, yellow cells require a letter somewhere other than that
//! position, and gray cells rule a letter out unless it is green or yellow
//! elsewhere on the board. Ignored cells carry no information.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::constraint::{format_misplaced, Misplaced};
use crate::feedback::{Feedback, FeedbackPattern};
use crate::mask::LetterMask;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("row has {actual} letters, board expects {expected}")]
    RowLength { expected: usize, actual: usize },
    #[error("contradiction at position {position}: '{existing}' and '{conflicting}' are both green")]
    Contradiction {
        /// 1-indexed.
        position: usize,
        existing: char,
        conflicting: char,
    },
    #[error("'{0}' is not a letter")]
    NotALetter(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Exact,
    Present,
    Absent,
    Ignored,
}

impl From<Feedback> for CellState {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Exact => CellState::Exact,
            Feedback::Present => CellState::Present,
            Feedback::Absent => CellState::Absent,
        }
    }
}

/// Constraints read off a board, in the text encoding the filter accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConstraints {
    pub length: usize,
    pub pattern: String,
    pub excluded: String,
    pub misplaced: String,
    /// Letters marked green or yellow anywhere.
    pub used: LetterMask,
    pub excluded_mask: LetterMask,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    length: usize,
    rows: Vec<Vec<(char, CellState)>>,
    /// Letters ruled out by hand, on top of the gray cells.
    extra_excluded: LetterMask,
}

impl Board {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            rows: Vec::new(),
            extra_excluded: LetterMask::EMPTY,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn rows(&self) -> &[Vec<(char, CellState)>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Remove the most recent row.
    pub fn pop_row(&mut self) -> Option<Vec<(char, CellState)>> {
        self.rows.pop()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.extra_excluded = LetterMask::EMPTY;
    }

    pub fn exclude(&mut self, letters: &str) {
        self.extra_excluded = self.extra_excluded | LetterMask::from_letters(letters);
    }

    /// Append a guess together with the feedback it received.
    pub fn record(&mut self, guess: &str, pattern: &FeedbackPattern) -> Result<(), BoardError> {
        for actual in [guess.chars().count(), pattern.len()] {
            if actual != self.length {
                return Err(BoardError::RowLength {
                    expected: self.length,
                    actual,
                });
            }
        }
        let cells = guess
            .chars()
            .zip(pattern.feedbacks())
            .map(|(c, &f)| (c, f.into()))
            .collect();
        self.push_row(cells)
    }

    pub fn push_row(&mut self, cells: Vec<(char, CellState)>) -> Result<(), BoardError> {
        if cells.len() != self.length {
            return Err(BoardError::RowLength {
                expected: self.length,
                actual: cells.len(),
            });
        }
        let mut row = Vec::with_capacity(cells.len());
        for (c, state) in cells {
            if state != CellState::Ignored && !c.is_ascii_alphabetic() {
                return Err(BoardError::NotALetter(c));
            }
            row.push((c.to_ascii_lowercase(), state));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Combine every row into one set of constraints.
    pub fn constraints(&self) -> Result<BoardConstraints, BoardError> {
        let mut pattern: Vec<Option<char>> = vec![None; self.length];
        let mut misplaced = Misplaced::new();
        let mut gray = self.extra_excluded;

        for row in &self.rows {
            for (i, &(c, state)) in row.iter().enumerate() {
                match state {
                    CellState::Exact => match pattern[i] {
                        Some(existing) if existing != c => {
                            return Err(BoardError::Contradiction {
                                position: i + 1,
                                existing,
                                conflicting: c,
                            });
                        }
                        _ => pattern[i] = Some(c),
                    },
                    CellState::Present => {
                        misplaced.entry(c).or_insert_with(BTreeSet::new).insert(i);
                    }
                    CellState::Absent => gray.insert(c as u8),
                    CellState::Ignored => {}
                }
            }
        }

        let green: LetterMask = pattern.iter().flatten().map(|&c| c as u8).collect();
        let yellow: LetterMask = misplaced.keys().map(|&c| c as u8).collect();
        let used = green | yellow;
        // A gray copy of a letter that is green or yellow elsewhere only
        // caps its count; it does not rule the letter out.
        let excluded_mask = gray - used;

        Ok(BoardConstraints {
            length: self.length,
            pattern: pattern.iter().map(|c| c.unwrap_or('_')).collect(),
            excluded: excluded_mask.to_string(),
            misplaced: format_misplaced(&misplaced),
            used,
            excluded_mask,
        })
    }
}
