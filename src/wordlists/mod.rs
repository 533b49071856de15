//! Word lists and pools
//!
//! Embedded lists compiled into the binary, plus loaders for external word
//! data. The loaded [`Pools`] are the only state shared across requests,
//! and they are immutable after construction.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED_EXTRA, ALLOWED_EXTRA_COUNT, ANSWERS, ANSWERS_COUNT};
pub use loader::{PoolError, Pools, build_pools, load_from_file, words_from_slice, words_from_str};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_extra_count_matches_const() {
        assert_eq!(ALLOWED_EXTRA.len(), ALLOWED_EXTRA_COUNT);
    }

    #[test]
    fn answers_share_one_length() {
        let len = ANSWERS[0].len();
        for &word in ANSWERS {
            assert_eq!(word.len(), len, "Word '{word}' breaks uniform length");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn extra_words_share_the_answers_length() {
        let len = ANSWERS[0].len();
        for &word in ALLOWED_EXTRA {
            assert_eq!(word.len(), len, "Word '{word}' breaks uniform length");
        }
    }

    #[test]
    fn extra_words_do_not_repeat_answers() {
        let answers: std::collections::HashSet<_> = ANSWERS.iter().collect();
        for &word in ALLOWED_EXTRA {
            assert!(
                !answers.contains(&word),
                "Extra word '{word}' duplicates an answer"
            );
        }
    }
}
