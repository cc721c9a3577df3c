//! Error types.

use thiserror::Error;

/// Error returned by [`FuzzyMatcher::try_rank`](crate::FuzzyMatcher::try_rank)
/// when an input exceeds the length caps configured on the matcher.
///
/// Lengths are counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("query is {len} characters long, the limit is {max}")]
    QueryTooLong { len: usize, max: usize },
    #[error("candidate is {len} characters long, the limit is {max}")]
    CandidateTooLong { len: usize, max: usize },
}
