//! Word pools and loading utilities
//!
//! Pools are built once at startup and passed by reference into request
//! handling; nothing here is mutated afterwards. Sources: the embedded
//! lists, a plain newline-delimited file, or the raw JavaScript word-data
//! blob the game ships (`var Aa=[...]` answers, `,La=[...]` extra entries).

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// The two word pools every request reads from
///
/// Invariants, established at construction: both pools are non-empty,
/// sorted, de-duplicated, share one uniform word length, and the allowed
/// pool is a superset of the answer pool.
#[derive(Debug, Clone)]
pub struct Pools {
    answers: Vec<Word>,
    allowed: Vec<Word>,
}

/// Errors from pool construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// The answer pool would be empty
    EmptyPool,
    /// A word's length differs from the pool's first word
    MixedLengths {
        expected: usize,
        actual: usize,
        word: String,
    },
    /// A list entry is not a valid word
    InvalidWord { word: String, source: WordError },
    /// Raw word-data blob without the expected array markers
    BadFormat(&'static str),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "Answer pool is empty"),
            Self::MixedLengths {
                expected,
                actual,
                word,
            } => write!(
                f,
                "Word '{word}' has {actual} letters but the pool uses {expected}"
            ),
            Self::InvalidWord { word, source } => {
                write!(f, "Invalid word '{word}' in word list: {source}")
            }
            Self::BadFormat(marker) => {
                write!(f, "Raw word data is missing the '{marker}' array")
            }
        }
    }
}

impl std::error::Error for PoolError {}

impl Pools {
    /// Build pools from an answer list and extra allowed-guess words
    ///
    /// Both inputs are sorted and de-duplicated; the allowed pool is the
    /// union of the two, so it always contains every answer.
    ///
    /// # Errors
    /// Fails with `EmptyPool` when no answers are given, or `MixedLengths`
    /// when any word's length differs from the first answer's.
    pub fn new(answers: Vec<Word>, extra_allowed: Vec<Word>) -> Result<Self, PoolError> {
        let mut answers = answers;
        answers.sort();
        answers.dedup();

        let Some(first) = answers.first() else {
            return Err(PoolError::EmptyPool);
        };
        let word_len = first.len();

        for word in answers.iter().chain(extra_allowed.iter()) {
            if word.len() != word_len {
                return Err(PoolError::MixedLengths {
                    expected: word_len,
                    actual: word.len(),
                    word: word.text().to_string(),
                });
            }
        }

        let mut allowed = answers.clone();
        allowed.extend(extra_allowed);
        allowed.sort();
        allowed.dedup();

        Ok(Self { answers, allowed })
    }

    /// Build the pools from the embedded word lists
    ///
    /// # Errors
    /// Fails only if the compiled-in lists are malformed.
    pub fn embedded() -> Result<Self, PoolError> {
        use super::{ALLOWED_EXTRA, ANSWERS};

        Self::new(words_from_slice(ANSWERS)?, words_from_slice(ALLOWED_EXTRA)?)
    }

    /// Words that can actually be the solution
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// All words accepted as guesses (superset of the answers)
    #[inline]
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// The uniform word length shared by both pools
    #[must_use]
    pub fn word_len(&self) -> usize {
        // Non-empty by construction
        self.answers.first().map_or(0, Word::len)
    }

    /// Pool sizes, for callers that budget the O(|allowed|·|answers|·L) scan
    #[must_use]
    pub fn sizes(&self) -> (usize, usize) {
        (self.answers.len(), self.allowed.len())
    }
}

/// Parse the raw JavaScript word-data blob into pools
///
/// The answer array follows the last `var Aa=[` marker, the extended entry
/// array the last `,La=[` marker, each terminated by `]`. Entries are
/// quoted, comma-separated words.
///
/// # Errors
/// Fails with `BadFormat` when a marker is missing, or propagates word and
/// pool validation errors.
pub fn build_pools(raw: &str) -> Result<Pools, PoolError> {
    let answers = parse_js_array(raw, "var Aa=[")?;
    let extra = parse_js_array(raw, ",La=[")?;

    Pools::new(answers, extra)
}

fn parse_js_array(raw: &str, marker: &'static str) -> Result<Vec<Word>, PoolError> {
    let Some((_, rest)) = raw.rsplit_once(marker) else {
        return Err(PoolError::BadFormat(marker));
    };
    let Some((body, _)) = rest.split_once(']') else {
        return Err(PoolError::BadFormat(marker));
    };

    body.split(',')
        .map(|entry| entry.trim().trim_matches('"'))
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            Word::new(entry).map_err(|source| PoolError::InvalidWord {
                word: entry.to_string(),
                source,
            })
        })
        .collect()
}

/// Convert a slice of string literals to words
///
/// # Errors
/// Fails with `InvalidWord` on the first entry that is not a valid word.
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, PoolError> {
    slice
        .iter()
        .map(|&s| {
            Word::new(s).map_err(|source| PoolError::InvalidWord {
                word: s.to_string(),
                source,
            })
        })
        .collect()
}

/// Parse words out of plain newline-delimited text
///
/// Blank lines and entries that are not valid words are skipped; uniform
/// length is enforced later by [`Pools::new`].
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Load words from a plain newline-delimited file
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}
