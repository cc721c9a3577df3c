//! Commander's algo itself: greedy segmentation of the refined alignment
//! table and the weighted score built from it.

use log::Level;

use crate::fuzzy_matcher::ScoreType;

use super::Atom;
use super::banding::Alignment;
use super::constants::*;

/// What the greedy walk collected about the chosen runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct Walk {
    /// Word-start characters covered by the chosen runs.
    pub(super) capitals_touched: usize,
    /// Number of runs the query was split into.
    pub(super) substrings: usize,
    /// Candidate column where the first run starts.
    pub(super) prefix_size: usize,
}

/// Score `pat` against `cho`, both already folded. `pat` must be a non-empty
/// subsequence of `cho`; `capitals` holds one marker per atom of `cho`.
pub(super) fn calculate_rank<C: Atom>(pat: &[C], cho: &[C], capitals: &[bool]) -> ScoreType {
    let mut alignment = Alignment::build(pat, cho);
    alignment.refine();
    if log_enabled!(Level::Trace) {
        trace!("alignment table:\n{}", alignment.table.dump(pat, cho));
    }

    let walk = greedy_walk(&mut alignment, capitals);
    let total_capitals = capitals.iter().filter(|&&c| c).count();
    let score = combine_score(pat.len(), cho.len(), walk, total_capitals);
    trace!("walk {walk:?}, {total_capitals} capitals, score {score:.3}");
    score
}

/// Walk the query left to right, committing at each row to the first run
/// that starts on a capital, or failing that to the longest run. Row windows
/// are narrowed as runs are consumed so later rows only look to the right.
pub(super) fn greedy_walk(alignment: &mut Alignment, capitals: &[bool]) -> Walk {
    let n = alignment.table.rows();
    let is_capital = |j: usize| capitals.get(j).copied().unwrap_or(false);
    let mut walk = Walk::default();

    let mut i = 0;
    while i < n {
        let mut best_j = 0;
        let mut best_len = 0;
        for j in alignment.window(i) {
            let run = alignment.table[(i, j)] as usize;
            if run != 0 && is_capital(j) {
                best_j = j;
                best_len = run;
                // A run never covers more query characters than are left.
                let span = run.min(n - i);
                walk.capitals_touched += (j..j + span).filter(|&k| is_capital(k)).count();
                break;
            } else if best_len < run {
                best_j = j;
                best_len = run;
            }
        }

        if i == 0 {
            walk.prefix_size = best_j;
        }

        let mut len = 0;
        let mut found_capital = false;
        loop {
            i += 1;
            len += 1;
            if i >= n {
                break;
            }
            alignment.first[i] = alignment.first[i].max(best_j + len);
            // Short queries stop inside a run when the next row can land on a
            // capital, unless the run itself goes on over one.
            if len < best_len && n < SHORT_QUERY_LEN && !is_capital(alignment.first[i]) {
                found_capital = alignment
                    .window(i)
                    .any(|j| alignment.table[(i, j)] != 0 && is_capital(j));
            }
            if len >= best_len || found_capital {
                break;
            }
        }

        walk.substrings += 1;
    }

    walk
}

/// Combine the walk into the final score. Terms are summed in a fixed order.
pub(super) fn combine_score(n: usize, m: usize, walk: Walk, total_capitals: usize) -> ScoreType {
    let n_f = n as f64;
    let m_f = m as f64;
    let touched = walk.capitals_touched as f64;
    let denom = n_f * (n_f + 1.0) + 1.0;

    let mut score = if walk.capitals_touched == n {
        (denom - 1.0) / denom
    } else {
        (denom - (walk.substrings as f64 * n_f + (n_f - touched))) / denom
    };
    score += (m_f - walk.prefix_size as f64) / m_f / (PREFIX_DIVISOR * denom);
    if total_capitals > 0 {
        score += touched / total_capitals as f64 / (CAPITAL_COVERAGE_DIVISOR * denom);
    }
    score += n_f / m_f / (LENGTH_RATIO_DIVISOR * denom);
    score
}
