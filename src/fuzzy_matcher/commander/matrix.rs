//! Base struct for the ranking algorithm: AlignmentTable

use std::fmt;
use std::ops::{Index, IndexMut};

use super::Atom;

/// Row-major `rows × cols` table of contiguous-run lengths, one row per query
/// character and one column per candidate character.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub(super) struct AlignmentTable {
    data: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl AlignmentTable {
    pub(super) fn zero(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    #[inline(always)]
    pub(super) fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub(super) fn cols(&self) -> usize {
        self.cols
    }

    /// Render the table as a grid labelled with the query (rows) and the
    /// candidate (columns).
    pub(super) fn dump<'a, C: Atom>(&'a self, pat: &'a [C], cho: &'a [C]) -> TableDump<'a, C> {
        TableDump { table: self, pat, cho }
    }
}

impl Index<(usize, usize)> for AlignmentTable {
    type Output = u32;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &u32 {
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for AlignmentTable {
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut u32 {
        &mut self.data[i * self.cols + j]
    }
}

pub(super) struct TableDump<'a, C> {
    table: &'a AlignmentTable,
    pat: &'a [C],
    cho: &'a [C],
}

impl<C: Atom> fmt::Display for TableDump<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   |")?;
        for &c in self.cho {
            write!(f, "{:>3}", Into::<char>::into(c))?;
        }
        writeln!(f)?;
        write!(f, "---+")?;
        for _ in self.cho {
            write!(f, "---")?;
        }
        writeln!(f)?;
        for (i, &p) in self.pat.iter().enumerate().take(self.table.rows()) {
            write!(f, " {} |", Into::<char>::into(p))?;
            for j in 0..self.table.cols() {
                write!(f, "{:>3}", self.table[(i, j)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
