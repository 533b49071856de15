//! Candidate filtering and entropy ranking
//!
//! The request-level engine: reduce the answer pool with the observed guess
//! history, then score every possible next guess by expected information
//! gain. All functions are pure; the caller owns the word pools and any
//! timeout policy.

pub mod entropy;
pub mod filter;

pub use entropy::{GuessMetrics, ScoredGuess, calculate_entropy, guess_metrics, rank};
pub use filter::{Observation, filter_candidates, reduce_history};

use crate::core::LengthMismatch;
use std::fmt;

/// Errors produced by the solver layer
///
/// An empty reduced candidate set is a success value everywhere except
/// [`rank`], which cannot produce a meaningful table from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A supplied word's length differs from the pool's uniform length
    InvalidWordLength { expected: usize, actual: usize },
    /// An observation's pattern is malformed or does not fit its word
    InvalidObservation(String),
    /// No pool word is consistent with the stated history
    EmptyCandidateSet,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWordLength { expected, actual } => {
                write!(
                    f,
                    "Word length {actual} does not match the pool's word length {expected}"
                )
            }
            Self::InvalidObservation(reason) => write!(f, "Invalid observation: {reason}"),
            Self::EmptyCandidateSet => {
                write!(f, "No candidate words are consistent with the given history")
            }
        }
    }
}

impl std::error::Error for SolveError {}

impl From<LengthMismatch> for SolveError {
    fn from(err: LengthMismatch) -> Self {
        Self::InvalidWordLength {
            expected: err.answer_len,
            actual: err.guess_len,
        }
    }
}
