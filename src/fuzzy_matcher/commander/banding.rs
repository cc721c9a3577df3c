//! Banding utils
//! Each query row only covers the window of candidate columns it can still
//! reach, `[first[i], last[i])`. The table is filled inside those windows,
//! then refined so that a left-to-right walk reads, at every cell, how much of
//! a run is still ahead of it.

use std::ops::Range;

use super::atom::Atom;
use super::matrix::AlignmentTable;

/// Alignment table plus its per-row column windows.
#[derive(Debug, Clone)]
pub(super) struct Alignment {
    pub(super) table: AlignmentTable,
    /// First matched column of each row (inclusive).
    pub(super) first: Vec<usize>,
    /// One past the last matched column of each row.
    pub(super) last: Vec<usize>,
}

impl Alignment {
    /// Fill the table with the length of the contiguous match ending at each
    /// cell. Row `i` is scanned from one past the first match of row `i - 1`,
    /// so rows never look left of where the query could have got to.
    pub(super) fn build<C: Atom>(pat: &[C], cho: &[C]) -> Self {
        let n = pat.len();
        let m = cho.len();
        let mut table = AlignmentTable::zero(n, m);
        let mut first = vec![m; n];
        let mut last = vec![0; n];

        for (i, &p) in pat.iter().enumerate() {
            let start = if i == 0 { 0 } else { first[i - 1] + 1 };
            for (j, &c) in cho.iter().enumerate().skip(start) {
                if !p.eq_ignore_case(c) {
                    continue;
                }
                table[(i, j)] = if i == 0 || j == 0 { 1 } else { table[(i - 1, j - 1)] + 1 };
                first[i] = first[i].min(j);
                last[i] = last[i].max(j + 1);
            }
        }

        Self { table, first, last }
    }

    #[inline(always)]
    pub(super) fn window(&self, i: usize) -> Range<usize> {
        self.first[i]..self.last[i]
    }

    /// Run the three refinement passes in order.
    pub(super) fn refine(&mut self) {
        self.contract_windows();
        self.propagate_runs();
        self.reseed_runs();
    }

    /// Backward pass: pull the end of row `i - 1`'s window in to its last match
    /// before the end of row `i`'s window. Matches past that point cannot be
    /// followed by the rest of the query.
    pub(super) fn contract_windows(&mut self) {
        for i in (1..self.table.rows()).rev() {
            let Some(mut bound) = self.last[i].checked_sub(1) else {
                continue;
            };
            if bound < self.last[i - 1] {
                while self.first[i - 1] < bound && self.table[(i - 1, bound - 1)] == 0 {
                    bound -= 1;
                }
                self.last[i - 1] = bound;
            }
        }
    }

    /// Backward pass: copy each run's length up its diagonal, so every cell of
    /// a run holds the full length of the run it belongs to.
    pub(super) fn propagate_runs(&mut self) {
        for i in (1..self.table.rows()).rev() {
            let Range { start, end } = self.window(i);
            for j in start.max(1)..end {
                let run = self.table[(i, j)];
                if run != 0 && self.table[(i - 1, j - 1)] != 0 {
                    self.table[(i - 1, j - 1)] = run;
                }
            }
        }
    }

    /// Forward pass: a run of length `L` starting at `(i, j)` writes `L - 1`
    /// at `(i + 1, j + 1)`, and so on, so each cell reads the remaining length
    /// of its run.
    pub(super) fn reseed_runs(&mut self) {
        let n = self.table.rows();
        let m = self.table.cols();
        for i in 0..n {
            for j in self.window(i) {
                let run = self.table[(i, j)];
                if run > 1 && i + 1 < n && j + 1 < m {
                    self.table[(i + 1, j + 1)] = run - 1;
                }
            }
        }
    }
}
