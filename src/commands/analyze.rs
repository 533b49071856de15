//! Word analysis command
//!
//! Entropy metrics for one specific guess against the (optionally
//! history-reduced) answer pool.

use crate::core::Word;
use crate::solver::{Observation, guess_metrics, reduce_history};
use crate::wordlists::Pools;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
}

/// Analyze the entropy of a word against the current candidate set
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid or not in the allowed pool
/// - The history is malformed
/// - The history leaves no candidates to measure against
pub fn analyze_word(
    word: &str,
    pools: &Pools,
    history: &[Observation],
) -> Result<AnalysisResult, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    if !pools.allowed().contains(&word_obj) {
        return Err(format!("Word '{word_obj}' not in the allowed guess list"));
    }

    let candidates = reduce_history(history, pools.answers()).map_err(|e| e.to_string())?;
    let metrics = guess_metrics(&word_obj, &candidates).map_err(|e| e.to_string())?;

    let total_candidates = candidates.len();
    let expected_reduction = metrics.entropy.exp2();

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction,
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;

    fn pools() -> Pools {
        let answers: Vec<Word> = ["crane", "slate", "plate", "grate", "shiny"]
            .iter()
            .map(|t| Word::new(*t).unwrap())
            .collect();
        Pools::new(answers, vec![Word::new("aeros").unwrap()]).unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let pools = pools();
        let result = analyze_word("slate", &pools, &[]).unwrap();

        assert_eq!(result.word, "SLATE");
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert!(result.max_partition >= 1);
        assert_eq!(result.total_candidates, 5);
    }

    #[test]
    fn analyze_respects_history() {
        let pools = pools();
        let history = [Observation::new(
            Word::new("crane").unwrap(),
            Pattern::parse("WWGWG").unwrap(),
        )
        .unwrap()];

        let result = analyze_word("slate", &pools, &history).unwrap();
        assert_eq!(result.total_candidates, 2); // SLATE and PLATE
    }

    #[test]
    fn analyze_rejects_unknown_word() {
        let pools = pools();
        let result = analyze_word("zzzzz", &pools, &[]);
        assert!(result.is_err());
    }

    #[test]
    fn analyze_rejects_malformed_word() {
        let pools = pools();
        let result = analyze_word("sh0rt", &pools, &[]);
        assert!(result.is_err());
    }

    #[test]
    fn analyze_contradictory_history_is_an_error() {
        let pools = pools();
        let history = [Observation::new(
            Word::new("crane").unwrap(),
            Pattern::parse("GGGGG").unwrap(),
        )
        .unwrap(),
        Observation::new(
            Word::new("slate").unwrap(),
            Pattern::parse("GGGGG").unwrap(),
        )
        .unwrap()];

        let result = analyze_word("slate", &pools, &history);
        assert!(result.is_err());
    }
}
