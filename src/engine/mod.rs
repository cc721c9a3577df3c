//! Ranking of candidate lists.
//!
//! Callers hand over typed candidates and a raw filter text; the engine
//! strips the kind prefix, scores every candidate of the right kind and
//! returns the matches best first, ties in the order they were given.

mod fuzzy;
mod query;

use crate::fuzzy_matcher::ScoreType;

pub use self::fuzzy::{RankEngine, RankEngineBuilder};
pub use self::query::{COMMAND_PREFIX, CandidateKind, FILE_PREFIX, KindFilter, Query};

/// A string to rank, tagged with what it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub kind: CandidateKind,
}

impl Candidate {
    pub fn new(text: impl Into<String>, kind: CandidateKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn file(text: impl Into<String>) -> Self {
        Self::new(text, CandidateKind::File)
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(text, CandidateKind::Command)
    }
}

/// A matched candidate: its position in the input list and its score.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RankedCandidate {
    pub index: usize,
    pub score: ScoreType,
}
