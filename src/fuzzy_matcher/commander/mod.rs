//! Commander fuzzy ranking algorithm.
//!
//! Ranks a candidate by how a query can be laid over it as a sequence of
//! contiguous runs, favouring runs that start on word boundaries.
//!
//! ## Stages
//!
//! 1. **Folding**: query and candidate are case-folded; capital (word-start)
//!    markers are computed for the candidate.
//! 2. **Prefilter**: a single-pass subsequence test rejects candidates the
//!    query cannot fit into.
//! 3. **Banding**: a table of contiguous-run lengths is filled, each row only
//!    over the columns it can still reach, then refined with one window
//!    contraction pass and two run-length propagation passes.
//! 4. **Greedy walk**: the query is consumed run by run, taking the first run
//!    on a capital, else the longest one. No backtracking.
//! 5. **Score**: fragmentation, capital coverage, start offset and length
//!    ratio are combined into a single key.
//!
//! Every call allocates its own tables and frees them on return.

mod algo;
mod atom;
mod banding;
mod constants;
mod matrix;
mod normalize;
mod prefilter;

use self::algo::calculate_rank;
use self::atom::Atom;
use self::normalize::{fold_ascii, fold_ascii_candidate, fold_candidate, fold_chars};
use self::prefilter::is_subsequence;

use crate::fuzzy_matcher::{FuzzyMatcher, PERFECT_SCORE, ScoreType};
use crate::{CapitalSource, RankError};

/// Score already folded input. `None` when the query does not fit.
fn rank_slices<C: Atom>(pat: &[C], cho: &[C], capitals: &[bool]) -> Option<ScoreType> {
    if pat.is_empty() {
        return Some(PERFECT_SCORE);
    }
    if !is_subsequence(pat, cho) {
        return None;
    }
    if pat == cho {
        return Some(PERFECT_SCORE);
    }
    Some(calculate_rank(pat, cho, capitals))
}

/// Subsequence test on unfolded text, see [`crate::is_subsequence`].
pub(crate) fn raw_subsequence(query: &str, candidate: &str) -> bool {
    if query.is_ascii() && candidate.is_ascii() {
        return is_subsequence(query.as_bytes(), candidate.as_bytes());
    }
    let pat: Vec<char> = query.chars().collect();
    let cho: Vec<char> = candidate.chars().collect();
    is_subsequence(&pat, &cho)
}

/// Commander matcher: greedy run segmentation over a banded table of
/// contiguous-match lengths.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CommanderMatcher {
    pub(crate) capitals: CapitalSource,
    pub(crate) max_query_len: Option<usize>,
    pub(crate) max_candidate_len: Option<usize>,
}

impl CommanderMatcher {
    /// Create a new `CommanderMatcher` reading capital markers from `capitals`,
    /// without length limits.
    pub const fn new(capitals: CapitalSource) -> Self {
        Self {
            capitals,
            max_query_len: None,
            max_candidate_len: None,
        }
    }

    pub fn capitals(mut self, capitals: CapitalSource) -> Self {
        self.capitals = capitals;
        self
    }

    /// Refuse queries longer than `max` characters.
    pub fn max_query_len(mut self, max: Option<usize>) -> Self {
        self.max_query_len = max;
        self
    }

    /// Refuse candidates longer than `max` characters. The alignment table is
    /// `query × candidate` cells, so this bounds per-call memory.
    pub fn max_candidate_len(mut self, max: Option<usize>) -> Self {
        self.max_candidate_len = max;
        self
    }

    fn check_limits(&self, query: &str, candidate: &str) -> Result<(), RankError> {
        if let Some(max) = self.max_query_len {
            let len = query.chars().count();
            if len > max {
                return Err(RankError::QueryTooLong { len, max });
            }
        }
        if let Some(max) = self.max_candidate_len {
            let len = candidate.chars().count();
            if len > max {
                return Err(RankError::CandidateTooLong { len, max });
            }
        }
        Ok(())
    }

    fn run(&self, query: &str, candidate: &str) -> Option<ScoreType> {
        if query.is_empty() {
            return Some(PERFECT_SCORE);
        }

        // Fast path for ASCII ranking
        if query.is_ascii() && candidate.is_ascii() {
            let pat = fold_ascii(query);
            let (cho, capitals) = fold_ascii_candidate(candidate, self.capitals);
            return rank_slices(&pat, &cho, &capitals);
        }

        let pat = fold_chars(query);
        let (cho, capitals) = fold_candidate(candidate, self.capitals);
        rank_slices(&pat, &cho, &capitals)
    }
}

// ---------------------------------------------------------------------------
// FuzzyMatcher trait implementation
// ---------------------------------------------------------------------------

impl FuzzyMatcher for CommanderMatcher {
    fn try_match(&self, query: &str, candidate: &str) -> Result<Option<ScoreType>, RankError> {
        self.check_limits(query, candidate)?;
        Ok(self.run(query, candidate))
    }
}
