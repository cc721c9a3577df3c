use std::cmp::Ordering;

use super::{FuzzyMatcher, ScoreType};

/// Assert that ranking `candidates` against `query` keeps them in the given
/// order, best first.
pub(crate) fn assert_order(matcher: &dyn FuzzyMatcher, query: &str, candidates: &[&str]) {
    let mut ranked: Vec<(&str, ScoreType)> = candidates.iter().map(|&c| (c, matcher.rank(query, c))).collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    let got: Vec<&str> = ranked.iter().map(|&(c, _)| c).collect();
    assert_eq!(got, candidates, "unexpected order for {query:?}: {ranked:?}");
}
