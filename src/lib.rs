//! Entropy-maximising word-guess advisor
//!
//! Given the guesses made so far and the feedback each received, this crate
//! narrows the set of words that can still be the answer and ranks every
//! allowed next guess by the Shannon entropy of its feedback distribution —
//! the expected information gain in bits.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_advisor::input::parse_history;
//! use wordle_advisor::solver::{rank, reduce_history};
//! use wordle_advisor::wordlists::Pools;
//!
//! let pools = Pools::embedded().unwrap();
//! let history = parse_history("CRANE:WWGWG").unwrap();
//!
//! let remaining = reduce_history(&history, pools.answers()).unwrap();
//! let table = rank(pools.allowed(), &remaining).unwrap();
//! println!("best guess: {}", table[0].word);
//! ```

// Core domain types
pub mod core;

// Filtering and entropy ranking
pub mod solver;

// Guess-history text parsing
pub mod input;

// Word lists and pools
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
