// ---------------------------------------------------------------------------
// Scoring constants
// ---------------------------------------------------------------------------

/// Non-alphanumeric characters that do not end a word.
pub(super) const WORD_JOINERS: [char; 2] = ['\'', '.'];

/// Queries shorter than this keep looking for a capital-touching run while
/// walking through a chosen run.
pub(super) const SHORT_QUERY_LEN: usize = 4;

/// Divisor (times the score denominator) of the early-start term.
pub(super) const PREFIX_DIVISOR: f64 = 2.0;

/// Divisor (times the score denominator) of the word-start coverage term.
pub(super) const CAPITAL_COVERAGE_DIVISOR: f64 = 4.0;

/// Divisor (times the score denominator) of the query/candidate length term.
pub(super) const LENGTH_RATIO_DIVISOR: f64 = 8.0;
