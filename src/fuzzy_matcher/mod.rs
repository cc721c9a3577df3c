//! Fuzzy matchers and the trait the ranking engine drives them through.

pub mod commander;
#[cfg(test)]
pub(crate) mod util;

use crate::RankError;

/// Ranking key produced by a matcher. Ordinal only: compare scores computed
/// for the same query, never interpret one on its own.
pub type ScoreType = f64;

/// Score of an empty query or an exact match.
pub const PERFECT_SCORE: ScoreType = 1.0;

/// Score of a rejected candidate.
pub const NO_MATCH_SCORE: ScoreType = 0.0;

pub trait FuzzyMatcher: Send + Sync {
    /// Score `candidate` against `query`, `Ok(None)` when it does not match.
    fn try_match(&self, query: &str, candidate: &str) -> Result<Option<ScoreType>, RankError>;

    /// Like [`try_match`](Self::try_match), treating oversized input as a
    /// non-match.
    fn fuzzy_match(&self, query: &str, candidate: &str) -> Option<ScoreType> {
        match self.try_match(query, candidate) {
            Ok(score) => score,
            Err(e) => {
                debug!("rejecting candidate: {e}");
                None
            }
        }
    }

    /// Score as a plain sort key, [`NO_MATCH_SCORE`] for a non-match.
    fn rank(&self, query: &str, candidate: &str) -> ScoreType {
        self.fuzzy_match(query, candidate).unwrap_or(NO_MATCH_SCORE)
    }

    fn try_rank(&self, query: &str, candidate: &str) -> Result<ScoreType, RankError> {
        Ok(self.try_match(query, candidate)?.unwrap_or(NO_MATCH_SCORE))
    }
}
