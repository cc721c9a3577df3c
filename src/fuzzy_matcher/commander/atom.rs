//! Byte/Char helpers
use memchr::{memchr, memchr2};

use super::constants::WORD_JOINERS;

pub(super) trait Atom: PartialEq + Into<char> + Copy {
    fn is_alnum(self) -> bool;
    fn is_upper(self) -> bool;

    /// Characters that separate nothing even though they are not alphanumeric
    /// (`don't`, `file.txt`).
    #[inline(always)]
    fn is_word_joiner(self) -> bool {
        let ch: char = self.into();
        WORD_JOINERS.contains(&ch)
    }

    /// Query-side test of the subsequence filter: `self` is consumed by
    /// `other` when they are equal or when `self` uppercased is `other`.
    fn accepts(self, other: Self) -> bool;

    /// Case-insensitive comparison used while filling the alignment table.
    fn eq_ignore_case(self, other: Self) -> bool;

    /// Index of the first atom of `haystack` that [`accepts`](Atom::accepts)
    /// `self`.
    #[inline]
    fn find_accepted_in(self, haystack: &[Self]) -> Option<usize> {
        haystack.iter().position(|&c| self.accepts(c))
    }
}

impl Atom for u8 {
    #[inline(always)]
    fn is_alnum(self) -> bool {
        self.is_ascii_alphanumeric()
    }
    #[inline(always)]
    fn is_upper(self) -> bool {
        self.is_ascii_uppercase()
    }
    #[inline(always)]
    fn accepts(self, other: Self) -> bool {
        self == other || self.to_ascii_uppercase() == other
    }
    #[inline(always)]
    fn eq_ignore_case(self, other: Self) -> bool {
        self.eq_ignore_ascii_case(&other)
    }

    /// Both accepted forms are searched at once with `memchr2`.
    #[inline]
    fn find_accepted_in(self, haystack: &[Self]) -> Option<usize> {
        let upper = self.to_ascii_uppercase();
        if upper == self {
            memchr(self, haystack)
        } else {
            memchr2(self, upper, haystack)
        }
    }
}

impl Atom for char {
    #[inline(always)]
    fn is_alnum(self) -> bool {
        self.is_alphanumeric()
    }
    #[inline(always)]
    fn is_upper(self) -> bool {
        self.is_uppercase()
    }
    #[inline]
    fn accepts(self, other: Self) -> bool {
        if self == other {
            return true;
        }
        // Only single-char uppercase forms can equal a single candidate char.
        let mut upper = self.to_uppercase();
        upper.next() == Some(other) && upper.next().is_none()
    }
    #[inline]
    fn eq_ignore_case(self, other: Self) -> bool {
        self == other || self.to_lowercase().eq(other.to_lowercase())
    }
}

/// Tracks whether the scan is at the beginning of a word.
pub(super) struct WordStarts {
    at_bow: bool,
}

impl WordStarts {
    pub(super) fn new() -> Self {
        Self { at_bow: true }
    }

    /// Feed the next character; returns whether it is a capital marker.
    #[inline]
    pub(super) fn mark<C: Atom>(&mut self, c: C) -> bool {
        let alnum = c.is_alnum();
        let capital = (self.at_bow && alnum) || c.is_upper();
        self.at_bow = !alnum && !c.is_word_joiner();
        capital
    }
}

/// Capital markers of `cho`: first alphanumeric character, uppercase letters
/// and characters that follow a separator.
pub(super) fn capital_markers<C: Atom>(cho: &[C]) -> Vec<bool> {
    let mut starts = WordStarts::new();
    cho.iter().map(|&c| starts.mark(c)).collect()
}
