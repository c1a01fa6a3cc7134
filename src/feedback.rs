//! Feedback calculation for guesses.
//!
//! This module computes the exact/present/absent pattern a guess receives
//! against an answer, following the usual Wordle rules for repeated letters.

use std::fmt;

use crate::mask::LetterMask;
use crate::ALPHABET_LEN;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Exact,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word, or all of its occurrences already accounted for (gray)
    Absent,
}

impl Feedback {
    /// Letter used in the text form of a pattern.
    pub fn to_char(self) -> char {
        match self {
            Feedback::Exact => 'G',
            Feedback::Present => 'Y',
            Feedback::Absent => 'B',
        }
    }

    pub fn to_emoji(self) -> char {
        match self {
            Feedback::Exact => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Exact),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// A complete feedback pattern, one entry per letter of the guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(Vec<Feedback>);

impl FeedbackPattern {
    pub fn new(feedbacks: Vec<Feedback>) -> Self {
        Self(feedbacks)
    }

    /// The winning pattern for a word of `len` letters.
    pub fn all_exact(len: usize) -> Self {
        Self(vec![Feedback::Exact; len])
    }

    /// Calculate the feedback pattern for a guess against an answer.
    ///
    /// Exact matches are resolved first and consume their letter. The
    /// remaining guess letters are then marked present from left to right
    /// while the answer still has unclaimed copies of them. Comparison is
    /// case-insensitive.
    pub fn calculate(guess: &str, answer: &str) -> Self {
        let guess = guess.as_bytes();
        let answer = answer.as_bytes();
        debug_assert_eq!(guess.len(), answer.len());

        let mut feedback = vec![Feedback::Absent; guess.len()];
        let mut answer_remaining = [0usize; ALPHABET_LEN];

        for (i, &a) in answer.iter().enumerate() {
            let exact = guess
                .get(i)
                .is_some_and(|g| g.eq_ignore_ascii_case(&a));
            if exact {
                feedback[i] = Feedback::Exact;
            } else if let Some(idx) = LetterMask::letter_index(a) {
                answer_remaining[idx] += 1;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if feedback[i] == Feedback::Exact {
                continue;
            }
            if let Some(idx) = LetterMask::letter_index(g) {
                if answer_remaining[idx] > 0 {
                    feedback[i] = Feedback::Present;
                    answer_remaining[idx] -= 1;
                }
            }
        }

        Self(feedback)
    }

    pub fn feedbacks(&self) -> &[Feedback] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this pattern represents a win (all exact)
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == Feedback::Exact)
    }

    /// Parse a pattern from a string like "gybbb" or "21000"
    pub fn parse(s: &str) -> Option<Self> {
        let feedbacks: Option<Vec<_>> = s.trim().chars().map(Feedback::from_char).collect();
        let feedbacks = feedbacks?;
        (!feedbacks.is_empty()).then(|| Self(feedbacks))
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|f| f.to_emoji()).collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fb in &self.0 {
            write!(f, "{}", fb.to_char())?;
        }
        Ok(())
    }
}

/// Feedback of `guess` against `answer` as `G`/`Y`/`B` text.
pub fn feedback_pattern(guess: &str, answer: &str) -> String {
    FeedbackPattern::calculate(guess, answer).to_string()
}
