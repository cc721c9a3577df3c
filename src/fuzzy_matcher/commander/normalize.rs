//! Case folding of queries and candidates.
//!
//! Pure-ASCII text folds to its ASCII lowercase, one byte per byte. Anything
//! else goes through full Unicode case folding, which may expand a character
//! (`ß` becomes `ss`), so the candidate is folded one source character at a
//! time to keep its capital markers aligned with the folded text.

use std::iter;

use unicode_casefold::UnicodeCaseFold;

use super::atom::{WordStarts, capital_markers};
use crate::CapitalSource;

pub(super) fn fold_ascii(text: &str) -> Vec<u8> {
    text.bytes().map(|b| b.to_ascii_lowercase()).collect()
}

pub(super) fn fold_chars(text: &str) -> Vec<char> {
    text.chars().case_fold().collect()
}

/// Fold an ASCII candidate and compute its capital markers.
pub(super) fn fold_ascii_candidate(text: &str, source: CapitalSource) -> (Vec<u8>, Vec<bool>) {
    let folded = fold_ascii(text);
    let capitals = match source {
        CapitalSource::Original => capital_markers(text.as_bytes()),
        CapitalSource::Folded => capital_markers(&folded),
    };
    (folded, capitals)
}

/// Fold a candidate and compute its capital markers, one marker per folded
/// character.
///
/// With [`CapitalSource::Original`] a marker is decided on the source
/// character and lands on the first character of its folded expansion.
pub(super) fn fold_candidate(text: &str, source: CapitalSource) -> (Vec<char>, Vec<bool>) {
    match source {
        CapitalSource::Folded => {
            let folded = fold_chars(text);
            let capitals = capital_markers(&folded);
            (folded, capitals)
        }
        CapitalSource::Original => {
            let mut folded = Vec::with_capacity(text.len());
            let mut capitals = Vec::with_capacity(text.len());
            let mut starts = WordStarts::new();
            for ch in text.chars() {
                let capital = starts.mark(ch);
                folded.extend(iter::once(ch).case_fold());
                capitals.push(capital);
                capitals.resize(folded.len(), false);
            }
            (folded, capitals)
        }
    }
}
