//! Guess-history text parsing
//!
//! The textual convention is comma-separated `WORD:PATTERN` entries, for
//! example `CRANE:GYWGW, SLATE:WWGGW`. Pattern symbols are G (correct),
//! Y (present) and W (absent), case-insensitive; the colored glyphs are
//! accepted too. Malformed entries are rejected rather than skipped, so a
//! typo never silently changes the candidate set.

use crate::core::{Pattern, Word, WordError};
use crate::solver::Observation;
use std::fmt;

/// Errors from history parsing, distinct from the solver's own taxonomy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Entry has no `WORD:PATTERN` separator
    MissingSeparator(String),
    /// The word half is not a valid word
    InvalidWord { entry: String, source: WordError },
    /// The pattern half contains an unrecognized symbol
    InvalidPattern(String),
    /// Word and pattern lengths differ within one entry
    MismatchedLengths { word: String, pattern: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator(entry) => {
                write!(f, "Entry '{entry}' is missing the ':' separator")
            }
            Self::InvalidWord { entry, source } => {
                write!(f, "Entry '{entry}' has an invalid word: {source}")
            }
            Self::InvalidPattern(entry) => {
                write!(f, "Entry '{entry}' has an invalid pattern (use G/Y/W)")
            }
            Self::MismatchedLengths { word, pattern } => {
                write!(f, "Pattern '{pattern}' does not fit word '{word}'")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a history string into ordered observations
///
/// Blank input and dangling commas yield no observations; anything else
/// must be a well-formed entry.
///
/// # Errors
/// Returns the first [`ParseError`] encountered, left to right.
///
/// # Examples
/// ```
/// use wordle_advisor::input::parse_history;
///
/// let history = parse_history("CRANE:GYWGW, slate:wwggw").unwrap();
/// assert_eq!(history.len(), 2);
/// assert_eq!(history[0].guess().text(), "CRANE");
/// assert_eq!(history[1].pattern().letters(), "WWGGW");
/// ```
pub fn parse_history(text: &str) -> Result<Vec<Observation>, ParseError> {
    let mut observations = Vec::new();

    for entry in text.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let Some((word_part, pattern_part)) = entry.split_once(':') else {
            return Err(ParseError::MissingSeparator(entry.to_string()));
        };

        let word = Word::new(word_part.trim()).map_err(|source| ParseError::InvalidWord {
            entry: entry.to_string(),
            source,
        })?;

        let pattern = Pattern::parse(pattern_part.trim())
            .ok_or_else(|| ParseError::InvalidPattern(entry.to_string()))?;

        if pattern.len() != word.len() {
            return Err(ParseError::MismatchedLengths {
                word: word.text().to_string(),
                pattern: pattern.letters(),
            });
        }

        // Infallible here: lengths were just checked
        let observation = Observation::new(word, pattern)
            .map_err(|_| ParseError::InvalidPattern(entry.to_string()))?;
        observations.push(observation);
    }

    Ok(observations)
}
