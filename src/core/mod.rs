//! Core domain types
//!
//! The fundamental types of the engine: words and feedback patterns. Pure,
//! deterministic, and free of I/O.

mod pattern;
pub mod word;

pub use pattern::{Feedback, LengthMismatch, Pattern};
pub use word::{MAX_WORD_LEN, Word, WordError};
