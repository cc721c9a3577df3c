use std::cmp::Ordering;
use std::fmt::{Display, Error, Formatter};

use rayon::prelude::*;

use super::{Candidate, Query, RankedCandidate};
use crate::CapitalSource;
use crate::fuzzy_matcher::commander::CommanderMatcher;
use crate::fuzzy_matcher::{FuzzyMatcher, NO_MATCH_SCORE, ScoreType};

//------------------------------------------------------------------------------
// Rank engine
#[derive(Default)]
pub struct RankEngineBuilder {
    query: String,
    capitals: CapitalSource,
    max_query_len: Option<usize>,
    max_candidate_len: Option<usize>,
    /// Score candidates on the rayon thread pool. The resulting order is the
    /// same either way.
    parallel: bool,
}

impl RankEngineBuilder {
    /// Raw filter text, kind prefix included.
    pub fn query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn capitals(mut self, capitals: CapitalSource) -> Self {
        self.capitals = capitals;
        self
    }

    pub fn max_query_len(mut self, max: Option<usize>) -> Self {
        self.max_query_len = max;
        self
    }

    pub fn max_candidate_len(mut self, max: Option<usize>) -> Self {
        self.max_candidate_len = max;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn build(self) -> RankEngine {
        let matcher = CommanderMatcher::new(self.capitals)
            .max_query_len(self.max_query_len)
            .max_candidate_len(self.max_candidate_len);
        debug!("Initialized Commander matcher ({:?})", matcher);
        self.build_with(Box::new(matcher))
    }

    /// Build around a custom matcher; capital and length options are ignored.
    pub fn build_with(self, matcher: Box<dyn FuzzyMatcher>) -> RankEngine {
        RankEngine {
            query: Query::parse(&self.query),
            matcher,
            parallel: self.parallel,
        }
    }
}

/// Best-first comparison of two scores. Equal scores compare equal so a
/// stable sort keeps their input order.
fn best_first(a: ScoreType, b: ScoreType) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// The ranking engine
pub struct RankEngine {
    query: Query,
    matcher: Box<dyn FuzzyMatcher>,
    parallel: bool,
}

impl RankEngine {
    /// Returns a default builder for chaining
    pub fn builder() -> RankEngineBuilder {
        RankEngineBuilder::default()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Score one candidate; `None` when its kind is filtered out or the query
    /// does not match it.
    pub fn score(&self, candidate: &Candidate) -> Option<ScoreType> {
        if !self.query.filter.accepts(candidate.kind) {
            return None;
        }
        self.matcher.fuzzy_match(&self.query.key, &candidate.text)
    }

    /// Sort comparator over candidates, best first. Rejected and filtered-out
    /// candidates sort as [`NO_MATCH_SCORE`].
    pub fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        let score = |c: &Candidate| self.score(c).unwrap_or(NO_MATCH_SCORE);
        best_first(score(a), score(b))
    }

    /// Rank a candidate list: matching candidates only, best first, ties in
    /// input order.
    pub fn rank_candidates(&self, candidates: &[Candidate]) -> Vec<RankedCandidate> {
        let scored = |(index, candidate): (usize, &Candidate)| {
            self.score(candidate).map(|score| RankedCandidate { index, score })
        };
        let mut ranked: Vec<RankedCandidate> = if self.parallel {
            candidates.par_iter().enumerate().filter_map(scored).collect()
        } else {
            candidates.iter().enumerate().filter_map(scored).collect()
        };
        ranked.sort_by(|a, b| best_first(a.score, b.score));
        debug!(
            "{}: {} of {} candidates matched",
            self,
            ranked.len(),
            candidates.len()
        );
        ranked
    }
}

impl Display for RankEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Rank: {})", self.query)
    }
}
