pub use crate::engine::{Candidate, CandidateKind, KindFilter, Query, RankEngine, RankEngineBuilder, RankedCandidate};
pub use crate::fuzzy_matcher::commander::CommanderMatcher;
pub use crate::fuzzy_matcher::{FuzzyMatcher, ScoreType};
pub use crate::{CapitalSource, RankError, is_subsequence, rank};
