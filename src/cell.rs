//! The grid's atom: [`Cell`] and its [`CellFlags`] attribute bitmask.
//!
//! Grounded on `libsuckterm.h`'s `Cell` struct (`char c[UTF_SIZ]`, `ushort
//! mode`, `ulong fg`, `ulong bg`) and `glyph_attribute` enum.

use crate::color::Color;

bitflags::bitflags! {
    /// Per-cell attribute flags. A named, typed replacement for
    /// `glyph_attribute`'s raw `ushort` bitmask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CellFlags: u16 {
        const REVERSE   = 1 << 0;
        const UNDERLINE = 1 << 1;
        const BOLD      = 1 << 2;
        /// DEC special-graphics charset is active for this cell's character.
        const GFX       = 1 << 3;
        const ITALIC    = 1 << 4;
        const BLINK     = 1 << 5;
        /// This cell ended a line via auto-wrap (the printable path set
        /// `WRAPNEXT` here and it later turned into an actual wrap).
        const WRAP      = 1 << 6;
        /// First half of a wide (double-column) glyph.
        const WIDE      = 1 << 7;
        /// Second, placeholder half of a wide glyph.
        const WDUMMY    = 1 << 8;
    }
}

impl Default for CellFlags {
    fn default() -> Self { CellFlags::empty() }
}

/// One grid cell: a character, its attribute flags, and its pen colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The displayed character. A space for a blank cell; the placeholder
    /// half of a wide glyph stores a space too (its content is inert -
    /// the `WIDE` cell to its left is what actually renders).
    pub ch: char,
    pub flags: CellFlags,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    /// A blank cell painted with `fg`/`bg` and no attributes.
    #[must_use]
    pub const fn blank(fg: Color, bg: Color) -> Self {
        Cell { ch: ' ', flags: CellFlags::empty(), fg, bg }
    }

    #[must_use]
    pub fn is_wide(&self) -> bool { self.flags.contains(CellFlags::WIDE) }

    #[must_use]
    pub fn is_wdummy(&self) -> bool { self.flags.contains(CellFlags::WDUMMY) }
}

impl Default for Cell {
    fn default() -> Self { Cell::blank(Color::Default, Color::Default) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_has_no_flags() {
        let c = Cell::blank(Color::Default, Color::Default);
        assert_eq!(c.ch, ' ');
        assert!(c.flags.is_empty());
    }

    #[test]
    fn at_most_one_of_wide_wdummy_is_representable_but_not_enforced_by_type() {
        // The invariant "at most one of WIDE, WDUMMY" is a grid-level
        // invariant maintained by callers (see crate::grid), not something
        // the bitflags type itself forbids.
        let mut c = Cell::default();
        c.flags.insert(CellFlags::WIDE);
        assert!(c.is_wide());
        assert!(!c.is_wdummy());
    }
}
