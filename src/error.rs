//! Error types for the terminal core.
//!
//! Per the design's error-handling policy, almost nothing inside the parser
//! or grid can fail in a way that propagates to the caller: malformed input
//! is recovered locally and logged via `tracing`. These types cover the
//! small set of operations with a genuine caller-facing failure mode.

use thiserror::Error;

/// Errors constructing or resizing a [`crate::Terminal`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TermError {
    /// `cols` or `rows` was zero.
    #[error("invalid terminal dimensions: {cols}x{rows} (both must be >= 1)")]
    InvalidDimensions { cols: u16, rows: u16 },

    /// A host palette operation (OSC 4/104) failed. Kept as a variant here,
    /// alongside `InvalidDimensions`, so callers that log both construction
    /// and palette failures through one error type can (§11).
    #[error(transparent)]
    Palette(#[from] PaletteError),
}

/// Errors from host-facing palette operations (`HostHandler::set_color`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    /// The palette index named in an OSC 4/104 request is out of range.
    #[error("palette index {0} out of range (0..=255)")]
    IndexOutOfRange(u16),

    /// The colour spec string could not be parsed (host-defined syntax,
    /// typically X11 colour names; opaque to this crate).
    #[error("unparseable colour spec: {0:?}")]
    UnparseableSpec(String),
}

impl TermError {
    /// Build the [`TermError::Palette`] variant from a failed OSC 4/104
    /// `set_color` call, for call sites that want one error type to log.
    #[must_use]
    pub fn from_palette(err: PaletteError) -> Self { TermError::Palette(err) }
}
