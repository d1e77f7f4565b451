//! Cursor position, pen, and state flags.
//!
//! Grounded on `libsuckterm.h`'s `TCursor` struct and `st.c`'s `tcursor()`,
//! which indexes a two-entry static array by the active screen (primary vs
//! alternate) to give each screen an independent saved cursor.

use crate::cell::CellFlags;
use crate::color::Color;

bitflags::bitflags! {
    /// Cursor state flags, distinct from [`crate::cell::CellFlags`] and
    /// [`crate::mode::TermMode`] so that, per SPEC_FULL.md §9, writing one
    /// kind of flag into the wrong bitmask is a type error rather than a
    /// silently-wrong integer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CursorState: u8 {
        /// The next printable character must wrap to a new line before
        /// being drawn (auto-wrap is pending).
        const WRAPNEXT = 1 << 0;
        /// Cursor motion is interpreted relative to the scroll region.
        const ORIGIN   = 1 << 1;
    }
}

impl Default for CursorState {
    fn default() -> Self { CursorState::empty() }
}

/// The current pen: attributes and colours applied to newly-written cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub flags: CellFlags,
    pub fg: Color,
    pub bg: Color,
}

impl Pen {
    #[must_use]
    pub const fn new(fg: Color, bg: Color) -> Self { Pen { flags: CellFlags::empty(), fg, bg } }

    /// SGR parameter 0: clear all attribute bits and revert to default
    /// colours (SPEC_FULL.md §9 / DESIGN.md Open Question 4).
    pub fn reset_to_defaults(&mut self, default_fg: Color, default_bg: Color) {
        self.flags = CellFlags::empty();
        self.fg = default_fg;
        self.bg = default_bg;
    }
}

/// Cursor position, pen, and wrap/origin state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub x: u16,
    pub y: u16,
    pub pen: Pen,
    pub state: CursorState,
}

impl Cursor {
    #[must_use]
    pub const fn new(default_fg: Color, default_bg: Color) -> Self {
        Cursor { x: 0, y: 0, pen: Pen::new(default_fg, default_bg), state: CursorState::empty() }
    }
}

/// One saved cursor slot. [`crate::term::Terminal`] holds exactly two of
/// these (`[primary, alternate]`), indexed by which screen is currently
/// active, per the data-model invariant that primary and alternate saves
/// are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedCursor {
    pub x: u16,
    pub y: u16,
    pub pen: Pen,
    pub state: CursorState,
}

impl From<Cursor> for SavedCursor {
    fn from(c: Cursor) -> Self { SavedCursor { x: c.x, y: c.y, pen: c.pen, state: c.state } }
}

impl SavedCursor {
    /// Restore a [`Cursor`]'s position/pen/state from this save. `WRAPNEXT`
    /// is part of the saved state per SPEC_FULL.md §8's fuzz property
    /// ("save_cursor followed by load_cursor... restores position, pen, and
    /// WRAPNEXT").
    pub fn restore_into(&self, cursor: &mut Cursor) {
        cursor.x = self.x;
        cursor.y = self.y;
        cursor.pen = self.pen;
        cursor.state = self.state;
    }
}
