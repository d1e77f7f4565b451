//! The `Terminal` aggregate: owns the grid, cursor, mode flags, and
//! charset-designation state, and implements every cursor/placement/reset
//! operation the parser layer drives.
//!
//! Grounded on `st.c`'s `treset`/`tnew`/`tresize`/`tmoveto`/`tmoveato`/
//! `tsetchar`/`tnewline`/`tputtab`, rewritten per SPEC_FULL.md §9 as methods
//! on one owned struct instead of a file-scope `Term term` global.

use crate::cell::{Cell, CellFlags};
use crate::charset::{Charset, CharsetSlot};
use crate::color::Color;
use crate::cursor::{Cursor, CursorState, Pen, SavedCursor};
use crate::error::TermError;
use crate::grid::Grid;
use crate::host::HostHandler;
use crate::mode::TermMode;

/// Which of the two charset designation registers (selected via SO/SI) is
/// currently active: G0 or G1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveCharsetReg {
    G0,
    G1,
}

/// Everything the parser layer reads and mutates, minus the `vte::Parser`
/// itself (kept in a sibling field on [`Terminal`] so a [`Performer`] can
/// borrow this struct and the parser disjointly — see
/// `crate::parser::performer`).
pub struct TerminalState<H: HostHandler> {
    pub(crate) grid: Grid,
    pub(crate) cursor: Cursor,
    /// Saved cursor per screen: `[primary, alternate]`.
    pub(crate) saved: [SavedCursor; 2],
    pub(crate) mode: TermMode,
    pub(crate) charsets: [Charset; 4],
    active_reg: ActiveCharsetReg,
    /// Slot awaiting a designation character after `ESC ( / ) / * / +`.
    pub(crate) pending_charset_slot: Option<CharsetSlot>,
    pub(crate) default_fg: Color,
    pub(crate) default_bg: Color,
    tab_spaces: u16,
    /// Last cell a motion report was sent for, so consecutive identical-cell
    /// motion events can be deduplicated per SPEC_FULL.md §6. Cleared on
    /// press/release so the next motion after a click always reports.
    last_motion_cell: Option<(u16, u16)>,
    pub host: H,
}

impl<H: HostHandler> TerminalState<H> {
    fn new(cols: u16, rows: u16, default_fg: Color, default_bg: Color, tab_spaces: u16, host: H) -> Self {
        let grid = Grid::new(cols, rows, default_fg, default_bg, tab_spaces);
        let cursor = Cursor::new(default_fg, default_bg);
        TerminalState {
            grid,
            cursor,
            saved: [SavedCursor::from(cursor), SavedCursor::from(cursor)],
            mode: TermMode::default(),
            charsets: [Charset::Ascii; 4],
            active_reg: ActiveCharsetReg::G0,
            pending_charset_slot: None,
            default_fg,
            default_bg,
            tab_spaces,
            last_motion_cell: None,
            host,
        }
    }

    #[must_use]
    pub fn cols(&self) -> u16 { self.grid.cols() }

    #[must_use]
    pub fn rows(&self) -> u16 { self.grid.rows() }

    #[must_use]
    pub fn cursor_x(&self) -> u16 { self.cursor.x }

    #[must_use]
    pub fn cursor_y(&self) -> u16 { self.cursor.y }

    #[must_use]
    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn grid_mut(&mut self) -> &mut Grid { &mut self.grid }

    #[must_use]
    pub fn mode(&self) -> TermMode { self.mode }

    /// `treset()`: defaults for pen, tab stops, scroll region, mode,
    /// charset slots, cursor position, both screens.
    pub fn reset(&mut self) {
        self.grid.reset(self.tab_spaces);
        self.cursor = Cursor::new(self.default_fg, self.default_bg);
        self.saved = [SavedCursor::from(self.cursor), SavedCursor::from(self.cursor)];
        self.mode = TermMode::default();
        self.charsets = [Charset::Ascii; 4];
        self.active_reg = ActiveCharsetReg::G0;
        self.pending_charset_slot = None;
    }

    /// `tresize`: grow/shrink the grid, clamp the cursor, reset the scroll
    /// region to the full new height. If shrinking would otherwise strand
    /// the cursor below the new bottom row, the grid slides its content up
    /// first (see [`Grid::resize`]) so the cursor's row is preserved.
    pub fn resize(&mut self, cols: u16, rows: u16) -> Result<(), TermError> {
        if cols == 0 || rows == 0 {
            return Err(TermError::InvalidDimensions { cols, rows });
        }
        self.grid.resize(cols, rows, self.cursor.y);
        self.cursor.x = self.cursor.x.min(cols - 1);
        self.cursor.y = self.cursor.y.min(rows - 1);
        Ok(())
    }

    fn origin_bounds(&self) -> (u16, u16) {
        if self.cursor.state.contains(CursorState::ORIGIN) {
            (self.grid.top(), self.grid.bot())
        } else {
            (0, self.grid.rows() - 1)
        }
    }

    /// `tmoveto`: clamp to `[0, cols-1] x [bounds]`, clear `WRAPNEXT`.
    pub fn move_to(&mut self, x: u16, y: u16) {
        let (min_y, max_y) = self.origin_bounds();
        self.cursor.x = x.min(self.cols() - 1);
        self.cursor.y = y.clamp(min_y, max_y);
        self.cursor.state.remove(CursorState::WRAPNEXT);
    }

    /// `tmoveato`: as [`Self::move_to`] but `y` is an absolute row that
    /// becomes region-relative when `ORIGIN` is set.
    pub fn move_abs(&mut self, x: u16, y: u16) {
        let y = if self.cursor.state.contains(CursorState::ORIGIN) { y + self.grid.top() } else { y };
        self.move_to(x, y);
    }

    /// Relative cursor motion (CUU/CUD/CUF/CUB and friends): move by
    /// `(dx, dy)` from the current position, through the same clamp as
    /// [`Self::move_to`].
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        let x = (i32::from(self.cursor.x) + dx).max(0) as u16;
        let y = (i32::from(self.cursor.y) + dy).max(0) as u16;
        self.move_to(x, y);
    }

    /// `tnewline`: advance to the next line, scrolling the region if at its
    /// bottom. `first_col` forces column 0 (CRLF-mode linefeed, or NEL).
    pub fn newline(&mut self, first_col: bool) {
        let y = self.cursor.y;
        if y == self.grid.bot() {
            self.grid.scroll_up(self.grid.top(), 1, self.default_fg, self.default_bg);
        } else {
            self.cursor.y = y + 1;
        }
        if first_col {
            self.cursor.x = 0;
        }
        self.cursor.state.remove(CursorState::WRAPNEXT);
    }

    /// IND (`ESC D`): scroll at `bot`, else cursor down.
    pub fn index_down(&mut self) {
        if self.cursor.y == self.grid.bot() {
            self.grid.scroll_up(self.grid.top(), 1, self.default_fg, self.default_bg);
        } else {
            self.cursor.y += 1;
        }
    }

    /// RI (`ESC M`): scroll down at `top`, else cursor up.
    pub fn reverse_index(&mut self) {
        if self.cursor.y == self.grid.top() {
            self.grid.scroll_down(self.grid.top(), 1, self.default_fg, self.default_bg);
        } else {
            self.cursor.y = self.cursor.y.saturating_sub(1);
        }
    }

    /// `save_cursor`: save position/pen/state into the slot for the
    /// currently-active screen.
    pub fn save_cursor(&mut self) {
        let slot = usize::from(self.grid.is_alt_screen());
        self.saved[slot] = SavedCursor::from(self.cursor);
    }

    /// `load_cursor`: restore from the slot for the currently-active
    /// screen.
    pub fn load_cursor(&mut self) {
        let slot = usize::from(self.grid.is_alt_screen());
        let saved = self.saved[slot];
        saved.restore_into(&mut self.cursor);
    }

    /// HTS (`ESC H`): set a tab stop at the current column.
    pub fn set_tab_here(&mut self) { self.grid.set_tab(self.cursor.x); }

    /// HT: advance to the next tab stop.
    pub fn tab_forward(&mut self, n: u16) {
        for _ in 0..n.max(1) {
            let next = self.grid.next_tab(self.cursor.x);
            if next == self.cursor.x {
                break;
            }
            self.cursor.x = next;
        }
    }

    /// CBT: back up `n` tab stops.
    pub fn tab_backward(&mut self, n: u16) {
        for _ in 0..n.max(1) {
            let prev = self.grid.prev_tab(self.cursor.x);
            if prev == self.cursor.x {
                break;
            }
            self.cursor.x = prev;
        }
    }

    #[must_use]
    pub fn current_pen(&self) -> Pen { self.cursor.pen }

    pub fn pen_mut(&mut self) -> &mut Pen { &mut self.cursor.pen }

    /// `tsetchar` (sans the DEC-graphics substitution, applied by the
    /// caller before reaching here — see `crate::parser::performer`):
    /// place `ch` at `(x, y)` with the current pen, cleaning up any
    /// wide-glyph pairing first, and mark the row dirty.
    pub fn put_char_at(&mut self, ch: char, x: u16, y: u16) {
        self.grid.unpair_wide_glyph_at(x, y, self.default_fg, self.default_bg);
        let pen = self.cursor.pen;
        self.grid.set_cell(x, y, Cell { ch, flags: pen.flags, fg: pen.fg, bg: pen.bg });
    }

    /// The printable-character path: width-aware placement with wrap and
    /// insert-mode handling, per SPEC_FULL.md §4.5's "Printable path".
    pub fn print_char(&mut self, ch: char, width: u8) {
        let cols = self.cols();
        let width = width.max(1);

        if self.mode.contains(TermMode::WRAP) && self.cursor.state.contains(CursorState::WRAPNEXT) {
            let (x, y) = (self.cursor.x, self.cursor.y);
            let mut cell = self.grid.cell(x, y);
            cell.flags.insert(CellFlags::WRAP);
            self.grid.set_cell(x, y, cell);
            self.newline(true);
        }

        if self.mode.contains(TermMode::INSERT) && self.cursor.x + 1 < cols {
            let (x, y) = (self.cursor.x, self.cursor.y);
            self.grid.insert_blank(x, y, 1, self.default_fg, self.default_bg);
        }

        if self.cursor.x + u16::from(width) > cols {
            self.newline(true);
        }

        let (x, y) = (self.cursor.x, self.cursor.y);
        self.put_char_at(ch, x, y);

        if width == 2 && x + 1 < cols {
            self.grid.set_cell(x, y, {
                let mut c = self.grid.cell(x, y);
                c.flags.insert(CellFlags::WIDE);
                c
            });
            let blank_fg = self.cursor.pen.fg;
            let blank_bg = self.cursor.pen.bg;
            let mut dummy = Cell::blank(blank_fg, blank_bg);
            dummy.flags.insert(CellFlags::WDUMMY);
            self.grid.set_cell(x + 1, y, dummy);
        }

        if self.cursor.x + u16::from(width) < cols {
            self.cursor.x += u16::from(width);
        } else {
            self.cursor.state.insert(CursorState::WRAPNEXT);
        }
    }

    /// SO/SI: select the active charset register, G0 or G1.
    pub fn select_shift_out(&mut self) { self.active_reg = ActiveCharsetReg::G1; }
    pub fn select_shift_in(&mut self) { self.active_reg = ActiveCharsetReg::G0; }

    /// The charset currently in effect for translation, and whether the
    /// pen's `GFX` bit should be set (active slot is DEC special graphics).
    pub fn sync_active_charset(&mut self) {
        let slot = match self.active_reg {
            ActiveCharsetReg::G0 => 0,
            ActiveCharsetReg::G1 => 1,
        };
        let gfx = self.charsets[slot] == Charset::DecSpecialGraphics;
        if gfx {
            self.cursor.pen.flags.insert(CellFlags::GFX);
        } else {
            self.cursor.pen.flags.remove(CellFlags::GFX);
        }
    }

    #[must_use]
    pub fn active_charset(&self) -> Charset {
        let slot = match self.active_reg {
            ActiveCharsetReg::G0 => 0,
            ActiveCharsetReg::G1 => 1,
        };
        self.charsets[slot]
    }

    /// Designate `charset` into `slot` (`ESC ( / ) / * / +` + final byte).
    pub fn designate_charset(&mut self, slot: CharsetSlot, charset: Charset) {
        let idx = match slot {
            CharsetSlot::G0 => 0,
            CharsetSlot::G1 => 1,
            CharsetSlot::G2 => 2,
            CharsetSlot::G3 => 3,
        };
        self.charsets[idx] = charset;
        self.sync_active_charset();
    }

    /// DECALN (`ESC # 8`): fill the whole screen with `E`.
    pub fn screen_alignment_test(&mut self) {
        let (cols, rows) = (self.cols(), self.rows());
        for y in 0..rows {
            for x in 0..cols {
                self.grid.set_cell(x, y, Cell { ch: 'E', flags: CellFlags::empty(), fg: self.default_fg, bg: self.default_bg });
            }
        }
    }

    /// Mode 1047/1049: swap to/from the alternate screen. `entering` also
    /// blanks the alternate screen (per SPEC_FULL.md §4.7, "on alternate-
    /// screen entry, the alternate is blanked").
    pub fn set_alt_screen(&mut self, entering: bool) {
        let currently_alt = self.grid.is_alt_screen();
        if entering == currently_alt {
            return;
        }
        if entering {
            self.grid.blank_alternate(self.default_fg, self.default_bg);
        }
        self.grid.swap_screen();
        self.mode.set(TermMode::ALTSCREEN, entering);
    }
}

/// A terminal instance: the state plus the (possibly mid-sequence) `vte`
/// parser, kept as a sibling field so `feed` can borrow them disjointly.
pub struct Terminal<H: HostHandler> {
    pub(crate) state: TerminalState<H>,
    pub(crate) parser: vte::Parser,
}

impl<H: HostHandler> Terminal<H> {
    #[must_use]
    pub fn new(cols: u16, rows: u16, default_fg: Color, default_bg: Color, tab_spaces: u16, host: H) -> Self {
        Terminal { state: TerminalState::new(cols, rows, default_fg, default_bg, tab_spaces, host), parser: vte::Parser::new() }
    }

    /// The single byte-stream entry point (§4.11 `feed`). Partial UTF-8/CSI
    /// tails are carried across calls inside `vte::Parser`'s own state.
    pub fn feed(&mut self, bytes: &[u8]) {
        let mut performer = crate::parser::performer::Performer::new(&mut self.state);
        for &byte in bytes {
            self.parser.advance(&mut performer, byte);
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) -> Result<(), TermError> { self.state.resize(cols, rows) }

    pub fn reset(&mut self) { self.state.reset(); }

    #[must_use]
    pub fn state(&self) -> &TerminalState<H> { &self.state }

    pub fn state_mut(&mut self) -> &mut TerminalState<H> { &mut self.state }

    /// Focus change notification: if `FOCUS` mode is on, emit the report.
    pub fn notify_focus(&mut self, focused: bool) {
        if self.state.mode.contains(TermMode::FOCUS) {
            let report = crate::mouse::encode_focus(focused);
            self.state.host.send(report);
        }
    }

    /// A pointer/mouse event: encode and send a report if an active mode
    /// wants it. Motion events are deduplicated against the last-reported
    /// cell per SPEC_FULL.md §6 ("motion events deduplicate consecutive
    /// identical cells"); press/release always report and reset the
    /// dedup tracking so the next motion after a click is not suppressed.
    pub fn notify_mouse_event(&mut self, event: crate::mouse::MouseEvent) {
        let cell = (event.col, event.row);
        if event.kind == crate::mouse::MouseEventKind::Motion {
            if self.state.last_motion_cell == Some(cell) {
                return;
            }
            self.state.last_motion_cell = Some(cell);
        } else {
            self.state.last_motion_cell = None;
        }
        if let Some(bytes) = crate::mouse::encode_report(event, self.state.mode) {
            self.state.host.send(&bytes);
        }
    }

    /// A size change: resize the grid and propagate. Pixel cell dimensions
    /// are accepted for parity with the host's `ioctl` call but are not
    /// otherwise interpreted by the core.
    pub fn notify_set_size(&mut self, cols: u16, rows: u16, _cell_w_px: u16, _cell_h_px: u16) -> Result<(), TermError> {
        self.resize(cols, rows)
    }

    /// `send_echo`: write `bytes` to the host, and if `ECHO` mode is on,
    /// locally render them (control bytes shown as `^X`).
    pub fn send_echo(&mut self, bytes: &[u8]) {
        self.state.host.send(bytes);
        if !self.state.mode.contains(TermMode::ECHO) {
            return;
        }
        for &b in bytes {
            if b < 0x20 || b == 0x7f {
                let printable = if b == 0x7f { b'?' } else { b + 0x40 };
                self.state.print_char('^', 1);
                self.state.print_char(printable as char, 1);
            } else if b < 0x80 {
                self.state.print_char(b as char, 1);
            }
        }
    }
}
