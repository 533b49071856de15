//! Candidate filtering against observed feedback
//!
//! A candidate stays alive exactly when it would have produced the observed
//! pattern for the guess. Folding that predicate over a guess history
//! narrows the answer pool; the observations commute, so the order only
//! matters for which error is reported first.

use super::SolveError;
use crate::core::{Pattern, Word};

/// A past guess together with the game's real feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    guess: Word,
    pattern: Pattern,
}

impl Observation {
    /// Pair a guess with its feedback pattern
    ///
    /// # Errors
    /// Fails with `InvalidObservation` when the pattern length differs from
    /// the word length.
    pub fn new(guess: Word, pattern: Pattern) -> Result<Self, SolveError> {
        if pattern.len() != guess.len() {
            return Err(SolveError::InvalidObservation(format!(
                "pattern has {} symbols but '{}' has {} letters",
                pattern.len(),
                guess,
                guess.len()
            )));
        }
        Ok(Self { guess, pattern })
    }

    #[inline]
    #[must_use]
    pub fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }
}

/// Keep the candidates that would have produced `observed` for `guess`
///
/// Returns a new set; the input is never mutated. An empty result is a
/// legitimate outcome, not an error.
///
/// # Errors
/// Fails with `InvalidWordLength` when the guess length differs from the
/// candidates' length, or `InvalidObservation` when the pattern length does.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{Pattern, Word};
/// use wordle_advisor::solver::filter_candidates;
///
/// let guess = Word::new("crane").unwrap();
/// let observed = Pattern::parse("WWGWG").unwrap();
/// let pool = vec![Word::new("slate").unwrap(), Word::new("crown").unwrap()];
///
/// let remaining = filter_candidates(&guess, observed, &pool).unwrap();
/// assert_eq!(remaining, vec![Word::new("slate").unwrap()]);
/// ```
pub fn filter_candidates(
    guess: &Word,
    observed: Pattern,
    candidates: &[Word],
) -> Result<Vec<Word>, SolveError> {
    let Some(first) = candidates.first() else {
        return Ok(Vec::new());
    };

    let word_len = first.len();
    if guess.len() != word_len {
        return Err(SolveError::InvalidWordLength {
            expected: word_len,
            actual: guess.len(),
        });
    }
    if observed.len() != word_len {
        return Err(SolveError::InvalidObservation(format!(
            "pattern has {} symbols but pool words have {} letters",
            observed.len(),
            word_len
        )));
    }

    let mut remaining = Vec::new();
    for candidate in candidates {
        if Pattern::calculate(guess, candidate)? == observed {
            remaining.push(candidate.clone());
        }
    }

    Ok(remaining)
}

/// Apply a guess history in order, narrowing `initial` step by step
///
/// Zero observations return the initial set unchanged. The result is fully
/// computed before being returned; a failing observation yields an error
/// with no partially-filtered set leaking out. Every observation is
/// validated against the pool's word length up front, so a malformed entry
/// is rejected even when an earlier observation already emptied the set.
///
/// # Errors
/// Fails with `InvalidWordLength` when any observation's word length
/// differs from the pool's, or propagates errors from
/// [`filter_candidates`].
pub fn reduce_history(
    observations: &[Observation],
    initial: &[Word],
) -> Result<Vec<Word>, SolveError> {
    let Some(first) = initial.first() else {
        return Ok(Vec::new());
    };
    let word_len = first.len();

    // Observation construction pins the pattern length to the guess
    // length, so checking the guess against the pool covers both.
    for observation in observations {
        if observation.guess().len() != word_len {
            return Err(SolveError::InvalidWordLength {
                expected: word_len,
                actual: observation.guess().len(),
            });
        }
    }

    let mut candidates = initial.to_vec();

    for observation in observations {
        candidates = filter_candidates(observation.guess(), observation.pattern(), &candidates)?;
    }

    Ok(candidates)
}
