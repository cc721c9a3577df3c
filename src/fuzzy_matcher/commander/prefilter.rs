//! Prefilter rejecting candidates before the alignment table is built

use super::Atom;

/// Whether every atom of `pattern` is accepted, in order, by some atom of
/// `choice`.
///
/// A single forward pass over both slices: each pattern atom moves the choice
/// cursor just past its first acceptable position. O(n + m), no backtracking.
pub(super) fn is_subsequence<C: Atom>(pattern: &[C], choice: &[C]) -> bool {
    if pattern.len() > choice.len() {
        return false;
    }
    let mut rest = choice;
    for &p in pattern {
        match p.find_accepted_in(rest) {
            Some(pos) => rest = &rest[pos + 1..],
            None => return false,
        }
    }
    true
}
