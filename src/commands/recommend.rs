//! The recommend command
//!
//! One full request: narrow the answer pool with the supplied history, then
//! rank every allowed guess by expected information gain. Stateless between
//! calls; the pools are the only input carried across requests.

use crate::core::Word;
use crate::solver::{Observation, ScoredGuess, SolveError, rank, reduce_history};
use crate::wordlists::Pools;

/// Outcome of a recommend request
#[derive(Debug, Clone)]
pub enum Recommendation {
    /// The history contradicts every pool word
    NoMatches,
    /// Remaining candidates plus the ranked guess table
    Ranked {
        /// Words still consistent with the history
        remaining: Vec<Word>,
        /// Guesses by descending expected information gain, truncated
        table: Vec<ScoredGuess>,
        /// Size of the full table before truncation
        total_ranked: usize,
    },
}

/// Run one recommendation request
///
/// With an empty history this ranks opening guesses over the full answer
/// pool. `answers_only` restricts the guess pool to possible solutions;
/// otherwise every allowed word is scored. The table is truncated to
/// `limit` rows.
///
/// # Errors
/// Propagates `InvalidWordLength` / `InvalidObservation` from the history.
/// A self-contradictory history is not an error: it yields
/// [`Recommendation::NoMatches`].
pub fn recommend(
    pools: &Pools,
    history: &[Observation],
    limit: usize,
    answers_only: bool,
) -> Result<Recommendation, SolveError> {
    let remaining = reduce_history(history, pools.answers())?;

    if remaining.is_empty() {
        return Ok(Recommendation::NoMatches);
    }

    let guess_pool = if answers_only {
        pools.answers()
    } else {
        pools.allowed()
    };

    let mut table = rank(guess_pool, &remaining)?;
    let total_ranked = table.len();
    table.truncate(limit);

    Ok(Recommendation::Ranked {
        remaining,
        table,
        total_ranked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pattern, Word};

    fn pools() -> Pools {
        let answers: Vec<Word> = ["crane", "slate", "plate", "grate"]
            .iter()
            .map(|t| Word::new(*t).unwrap())
            .collect();
        let extra = vec![Word::new("aeros").unwrap()];
        Pools::new(answers, extra).unwrap()
    }

    fn observation(guess: &str, pattern: &str) -> Observation {
        Observation::new(Word::new(guess).unwrap(), Pattern::parse(pattern).unwrap()).unwrap()
    }

    #[test]
    fn empty_history_ranks_openers() {
        let pools = pools();
        let result = recommend(&pools, &[], 10, false).unwrap();

        let Recommendation::Ranked {
            remaining,
            table,
            total_ranked,
        } = result
        else {
            panic!("expected a ranked table");
        };

        assert_eq!(remaining.len(), pools.answers().len());
        assert_eq!(total_ranked, pools.allowed().len());
        assert_eq!(table.len(), pools.allowed().len()); // Under the limit
    }

    #[test]
    fn history_narrows_before_ranking() {
        let pools = pools();
        let history = [observation("crane", "WWGWG")];

        let result = recommend(&pools, &history, 10, false).unwrap();
        let Recommendation::Ranked { remaining, .. } = result else {
            panic!("expected a ranked table");
        };

        // CRANE with only A/E correct leaves SLATE and PLATE
        let texts: Vec<&str> = remaining.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["PLATE", "SLATE"]);
    }

    #[test]
    fn limit_truncates_but_reports_total() {
        let pools = pools();
        let result = recommend(&pools, &[], 2, false).unwrap();

        let Recommendation::Ranked {
            table,
            total_ranked,
            ..
        } = result
        else {
            panic!("expected a ranked table");
        };

        assert_eq!(table.len(), 2);
        assert_eq!(total_ranked, pools.allowed().len());
    }

    #[test]
    fn answers_only_restricts_guess_pool() {
        let pools = pools();
        let result = recommend(&pools, &[], usize::MAX, true).unwrap();

        let Recommendation::Ranked { table, .. } = result else {
            panic!("expected a ranked table");
        };

        assert_eq!(table.len(), pools.answers().len());
        assert!(table.iter().all(|row| row.word.text() != "AEROS"));
    }

    #[test]
    fn contradictory_history_reports_no_matches() {
        let pools = pools();
        // All pool words share A and E with CRANE, so all-absent is impossible
        let history = [observation("crane", "WWWWW")];

        let result = recommend(&pools, &history, 10, false).unwrap();
        assert!(matches!(result, Recommendation::NoMatches));
    }

    #[test]
    fn malformed_history_is_an_error() {
        let pools = pools();
        let history = [observation("ox", "GW")];

        let result = recommend(&pools, &history, 10, false);
        assert!(matches!(
            result,
            Err(SolveError::InvalidWordLength { .. })
        ));
    }
}
