//! Fuzzy subsequence ranking for command palettes and quick-open lists.
//!
//! Given a short typed query and a candidate string, [`rank`] decides whether
//! the query is a case-insensitive subsequence of the candidate and, if so,
//! returns a score to sort candidates by (higher is better).
//!
//! ```
//! use commander::rank;
//!
//! assert_eq!(rank("", "anything"), 1.0);
//! assert_eq!(rank("xyz", "abc"), 0.0);
//! assert!(rank("gw", "GtkWidget") > rank("gw", "getwidget"));
//! ```
//!
//! Lists of typed candidates are ranked through [`engine::RankEngine`].

#[macro_use]
extern crate log;

pub mod engine;
mod error;
pub mod fuzzy_matcher;
pub mod prelude;

pub use crate::error::RankError;
pub use crate::fuzzy_matcher::commander::CommanderMatcher;
pub use crate::fuzzy_matcher::{FuzzyMatcher, NO_MATCH_SCORE, PERFECT_SCORE, ScoreType};

/// Which text the word-start ("capital") markers of a candidate are read from.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
pub enum CapitalSource {
    /// Markers come from the candidate as given, so uppercase letters count
    /// as word starts (`W` in `GtkWidget`).
    #[default]
    Original,
    /// Markers come from the case-folded candidate. Only separator-based word
    /// starts survive folding.
    Folded,
}

static DEFAULT_MATCHER: CommanderMatcher = CommanderMatcher::new(CapitalSource::Original);

/// Rank `candidate` against `query` with the default matcher.
///
/// Returns `1` for an empty query or a query equal to the candidate once both
/// are case-folded, `0` when the query is not a case-insensitive subsequence
/// of the candidate, and the combined match score otherwise.
pub fn rank(query: &str, candidate: &str) -> ScoreType {
    DEFAULT_MATCHER.rank(query, candidate)
}

/// Subsequence test on the raw, unfolded text.
///
/// A query character is consumed when it equals the candidate character, or
/// when its uppercase form does. `"a"` therefore fits into `"A"`, but `"A"`
/// does not fit into `"a"`.
pub fn is_subsequence(query: &str, candidate: &str) -> bool {
    fuzzy_matcher::commander::raw_subsequence(query, candidate)
}
