//! UTF-8 codec primitives and the display-width oracle.
//!
//! [`vte::Parser`] decodes UTF-8 internally for the CSI/OSC/ESC tokenizer
//! path (see [`crate::parser`]), but the standalone `decode`/`encode`/
//! `is_full_utf8` functions here are specified directly by the design
//! (ported from `helpers.c`'s `utf8decode`/`utf8encode`/`isfullutf8`) and are
//! exercised both as fuzz-tested units in their own right and by
//! [`crate::term::Terminal::send_echo`]'s local-echo rendering, which needs a
//! decode oracle independent of the CSI tokenizer.

pub mod utf8;

pub use utf8::{decode, encode, is_full_utf8, size_from_lead_byte};

/// Display width of a code point: 0 (control/zero-width), 1, or 2 (wide).
///
/// This is the "external width oracle" the design calls `wcwidth`-equivalent.
/// Implemented on top of [`unicode_width::UnicodeWidthChar`]; any width other
/// than 2 is clamped to 1, and `None` (the crate's notion of a
/// non-printable/zero-width scalar) is reported as 0.
#[must_use]
pub fn display_width(ch: char) -> u8 {
    match unicode_width::UnicodeWidthChar::width(ch) {
        Some(0) => 0,
        Some(2) => 2,
        None => 0,
        Some(_) => 1,
    }
}
