//! Small helpers for pulling defaulted integer arguments out of a
//! [`vte::Params`], matching `csi_parse`'s argument rules (SPEC_FULL.md
//! §4.6): "empty argument -> 0", with most CSI finals additionally treating
//! a resulting 0 as 1 (count-style arguments default to 1 unless noted).

use smallvec::SmallVec;
use vte::Params;

/// A flattened argument stream. Inline capacity 16 covers every CSI/SGR
/// sequence this crate recognizes without spilling to the heap (VT100's own
/// practical argument limit).
pub type ArgList = SmallVec<[u16; 16]>;

/// The `idx`-th parameter position's primary value (`.first()` of that
/// position's sub-param slice), or `0` if the position is absent. `vte`
/// already normalizes a missing/empty argument to `0`, so this is a plain
/// position lookup.
#[must_use]
pub fn raw(params: &Params, idx: usize) -> u16 { params.iter().nth(idx).and_then(|group| group.first().copied()).unwrap_or(0) }

/// As [`raw`], but a resulting `0` (missing or explicit `CSI 0 X`) is
/// replaced by `default` — the "all arguments default to 1 unless noted"
/// rule most CSI finals follow.
#[must_use]
pub fn count_or(params: &Params, idx: usize, default: u16) -> u16 {
    match raw(params, idx) {
        0 => default,
        n => n,
    }
}

/// Flatten every parameter position's sub-params into one sequential stream,
/// for SGR's argument walk (SPEC_FULL.md §4.8), which treats `38;2;r;g;b` and
/// `38:2:r:g:b` identically. An empty params list (bare `CSI m`) becomes a
/// single `0`, matching "CSI m" being equivalent to "CSI 0 m".
#[must_use]
pub fn flatten(params: &Params) -> ArgList {
    let flat: ArgList = params.iter().flat_map(|group| group.iter().copied()).collect();
    if flat.is_empty() { SmallVec::from_slice(&[0]) } else { flat }
}

/// Whether a CSI sequence carries the DEC-private `?` marker. `vte` collects
/// `<=>?` as an intermediate byte for CSI sequences.
#[must_use]
pub fn is_private(intermediates: &[u8]) -> bool { intermediates.first() == Some(&b'?') }

// `vte::Params` has no public constructor suited to building synthetic
// fixtures outside the parser, so `raw`/`count_or`/`flatten` are exercised
// end-to-end by feeding real CSI byte sequences through `Terminal` (see
// `crate::parser::operations::csi_ops` tests and `tests/conformance.rs`)
// rather than unit-tested against a hand-built `Params`.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_private_checks_leading_question_mark() {
        assert!(is_private(&[b'?']));
        assert!(!is_private(&[]));
        assert!(!is_private(&[b'$']));
    }
}
