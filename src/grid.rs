//! The two-screen cell grid: primary/alternate line storage, dirty-row
//! tracking, tab stops, and scroll-region operations.
//!
//! Grounded on `libsuckterm.h`'s `Term` struct (`line`, `alt`, `dirty`,
//! `tabs`, `top`/`bot`) and `st.c`'s `tscrollup`/`tscrolldown`/`tclearregion`/
//! `tnewline`/`tresize`. Per SPEC_FULL.md §9's "index-based rotation"
//! design note, scrolling rotates a `Vec<Vec<Cell>>` by index rather than
//! swapping raw line pointers.

use crate::cell::{Cell, CellFlags};
use crate::color::Color;

/// One screen's worth of state: its own cell storage, dirty flags, and
/// tab-stop table. [`Grid`] owns one of these for the primary screen and
/// one for the alternate screen.
#[derive(Debug, Clone)]
struct Screen {
    lines: Vec<Vec<Cell>>,
    dirty: Vec<bool>,
}

impl Screen {
    fn blank(cols: u16, rows: u16, fg: Color, bg: Color) -> Self {
        let row = vec![Cell::blank(fg, bg); cols as usize];
        Screen { lines: vec![row; rows as usize], dirty: vec![false; rows as usize] }
    }
}

/// Two screens of cells plus the shared tab-stop table and scroll region.
/// Tab stops and the scroll region are shared across screens, matching
/// `Term`'s single `tabs`/`top`/`bot` fields (not duplicated per screen).
#[derive(Debug, Clone)]
pub struct Grid {
    cols: u16,
    rows: u16,
    primary: Screen,
    alternate: Screen,
    on_alt: bool,
    tabs: Vec<bool>,
    top: u16,
    bot: u16,
    default_fg: Color,
    default_bg: Color,
}

impl Grid {
    /// `tnew` + the screen-shaped part of `treset`: allocate both screens
    /// blank, tab stops every `tab_spaces` columns, scroll region full
    /// height.
    #[must_use]
    pub fn new(cols: u16, rows: u16, default_fg: Color, default_bg: Color, tab_spaces: u16) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let mut grid = Grid {
            cols,
            rows,
            primary: Screen::blank(cols, rows, default_fg, default_bg),
            alternate: Screen::blank(cols, rows, default_fg, default_bg),
            on_alt: false,
            tabs: vec![false; cols as usize],
            top: 0,
            bot: rows - 1,
            default_fg,
            default_bg,
        };
        grid.install_default_tabs(tab_spaces);
        grid
    }

    fn install_default_tabs(&mut self, tab_spaces: u16) {
        let tab_spaces = tab_spaces.max(1);
        for t in self.tabs.iter_mut() {
            *t = false;
        }
        let mut col = tab_spaces;
        while (col as usize) < self.tabs.len() {
            self.tabs[col as usize] = true;
            col += tab_spaces;
        }
    }

    /// `treset()`: blank both screens, reset scroll region and tab stops,
    /// leave the active-screen selection as primary.
    pub fn reset(&mut self, tab_spaces: u16) {
        self.primary = Screen::blank(self.cols, self.rows, self.default_fg, self.default_bg);
        self.alternate = Screen::blank(self.cols, self.rows, self.default_fg, self.default_bg);
        self.on_alt = false;
        self.top = 0;
        self.bot = self.rows - 1;
        self.install_default_tabs(tab_spaces);
    }

    #[must_use]
    pub fn cols(&self) -> u16 { self.cols }

    #[must_use]
    pub fn rows(&self) -> u16 { self.rows }

    #[must_use]
    pub fn top(&self) -> u16 { self.top }

    #[must_use]
    pub fn bot(&self) -> u16 { self.bot }

    #[must_use]
    pub fn is_alt_screen(&self) -> bool { self.on_alt }

    fn active(&self) -> &Screen { if self.on_alt { &self.alternate } else { &self.primary } }

    fn active_mut(&mut self) -> &mut Screen { if self.on_alt { &mut self.alternate } else { &mut self.primary } }

    #[must_use]
    pub fn row(&self, y: u16) -> &[Cell] { &self.active().lines[y as usize] }

    pub fn row_mut(&mut self, y: u16) -> &mut [Cell] { &mut self.active_mut().lines[y as usize] }

    #[must_use]
    pub fn cell(&self, x: u16, y: u16) -> Cell { self.active().lines[y as usize][x as usize] }

    pub fn set_cell(&mut self, x: u16, y: u16, cell: Cell) {
        self.active_mut().lines[y as usize][x as usize] = cell;
        self.mark_dirty(y);
    }

    pub fn mark_dirty(&mut self, y: u16) { self.active_mut().dirty[y as usize] = true; }

    pub fn mark_all_dirty(&mut self) {
        for d in self.active_mut().dirty.iter_mut() {
            *d = true;
        }
    }

    #[must_use]
    pub fn is_dirty(&self, y: u16) -> bool { self.active().dirty[y as usize] }

    /// Consume (and clear) the dirty flag for row `y`, for a host render
    /// pass: "for each dirty row, consult the cells and clear the dirty
    /// flag".
    pub fn take_dirty(&mut self, y: u16) -> bool {
        let d = &mut self.active_mut().dirty[y as usize];
        std::mem::replace(d, false)
    }

    pub fn set_tab(&mut self, x: u16) {
        if (x as usize) < self.tabs.len() {
            self.tabs[x as usize] = true;
        }
    }

    pub fn clear_tab(&mut self, x: u16) {
        if (x as usize) < self.tabs.len() {
            self.tabs[x as usize] = false;
        }
    }

    pub fn clear_all_tabs(&mut self) {
        for t in self.tabs.iter_mut() {
            *t = false;
        }
    }

    /// Next tab stop strictly after `x`, clamped to the last column if none
    /// remains.
    #[must_use]
    pub fn next_tab(&self, x: u16) -> u16 {
        for col in (x + 1)..self.cols {
            if self.tabs[col as usize] {
                return col;
            }
        }
        self.cols - 1
    }

    /// Previous tab stop strictly before `x`, clamped to column 0.
    #[must_use]
    pub fn prev_tab(&self, x: u16) -> u16 {
        for col in (0..x).rev() {
            if self.tabs[col as usize] {
                return col;
            }
        }
        0
    }

    /// `tsetscroll`: normalise and install a new scroll region.
    pub fn set_scroll_region(&mut self, top: u16, bot: u16) {
        let top = top.min(self.rows - 1);
        let bot = bot.min(self.rows - 1);
        let (top, bot) = if top <= bot { (top, bot) } else { (bot, top) };
        self.top = top;
        self.bot = bot;
    }

    /// `tclearregion`: fill `[x1..=x2] x [y1..=y2]` with blanks painted in
    /// `fg`/`bg`, marking each touched row dirty. Coordinates are clamped
    /// and normalised so `x1<=x2, y1<=y2` before filling.
    pub fn clear_region(&mut self, x1: u16, y1: u16, x2: u16, y2: u16, fg: Color, bg: Color) {
        let x1 = x1.min(self.cols - 1);
        let x2 = x2.min(self.cols - 1);
        let y1 = y1.min(self.rows - 1);
        let y2 = y2.min(self.rows - 1);
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (y1, y2) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        for y in y1..=y2 {
            {
                let row = &mut self.active_mut().lines[y as usize];
                for x in x1..=x2 {
                    row[x as usize] = Cell::blank(fg, bg);
                }
            }
            self.mark_dirty(y);
        }
    }

    /// `tscrollup`: rows `[orig+n..=bot]` move up to `[orig..=bot-n]`; the
    /// vacated `n` rows at the bottom of the region become fresh blanks.
    /// `n` is clamped to `[0, bot-orig+1]`.
    pub fn scroll_up(&mut self, orig: u16, n: u16, fg: Color, bg: Color) {
        let region = self.bot.saturating_sub(orig) + 1;
        let n = n.min(region);
        if n == 0 {
            return;
        }
        let blank = vec![Cell::blank(fg, bg); self.cols as usize];
        let lines = &mut self.active_mut().lines;
        lines[orig as usize..=self.bot as usize].rotate_left(n as usize);
        for y in (self.bot - n + 1)..=self.bot {
            lines[y as usize] = blank.clone();
        }
        for y in orig..=self.bot {
            self.mark_dirty(y);
        }
    }

    /// `tscrolldown`: mirror image of [`Grid::scroll_up`].
    pub fn scroll_down(&mut self, orig: u16, n: u16, fg: Color, bg: Color) {
        let region = self.bot.saturating_sub(orig) + 1;
        let n = n.min(region);
        if n == 0 {
            return;
        }
        let blank = vec![Cell::blank(fg, bg); self.cols as usize];
        let lines = &mut self.active_mut().lines;
        lines[orig as usize..=self.bot as usize].rotate_right(n as usize);
        for y in orig..(orig + n) {
            lines[y as usize] = blank.clone();
        }
        for y in orig..=self.bot {
            self.mark_dirty(y);
        }
    }

    /// `tinsertblank` / `tdeletechar`: shift cells in row `y` right/left by
    /// `n` starting at column `x`, clearing the vacated tail/head.
    pub fn insert_blank(&mut self, x: u16, y: u16, n: u16, fg: Color, bg: Color) {
        let cols = self.cols as usize;
        let x = x as usize;
        let n = (n as usize).min(cols - x);
        let row = self.row_mut(y);
        row.copy_within(x..cols - n, x + n);
        for c in &mut row[x..x + n] {
            *c = Cell::blank(fg, bg);
        }
        self.mark_dirty(y);
    }

    pub fn delete_char(&mut self, x: u16, y: u16, n: u16, fg: Color, bg: Color) {
        let cols = self.cols as usize;
        let x = x as usize;
        let n = (n as usize).min(cols - x);
        let row = self.row_mut(y);
        row.copy_within(x + n..cols, x);
        for c in &mut row[cols - n..cols] {
            *c = Cell::blank(fg, bg);
        }
        self.mark_dirty(y);
    }

    /// `tdeleteline`/`tinsertblankline`'s `scroll_*(cursor.y, n)` delegation,
    /// gated by the caller on `cursor.y` being inside the scroll region.
    pub fn insert_blank_line(&mut self, y: u16, n: u16, fg: Color, bg: Color) {
        self.scroll_down(y, n, fg, bg);
    }

    pub fn delete_line(&mut self, y: u16, n: u16, fg: Color, bg: Color) {
        self.scroll_up(y, n, fg, bg);
    }

    /// `tswapscreen`: exchange the two screens' storage and flip which is
    /// active. Everything becomes dirty (a full repaint is needed since the
    /// visible content just changed completely).
    pub fn swap_screen(&mut self) {
        self.on_alt = !self.on_alt;
        self.mark_all_dirty();
    }

    /// Blank the alternate screen in place without touching which screen is
    /// active, for 1047/1049 entry semantics ("the alternate is blanked on
    /// entry").
    pub fn blank_alternate(&mut self, fg: Color, bg: Color) {
        self.alternate = Screen::blank(self.cols, self.rows, fg, bg);
    }

    /// `tresize`: grow/shrink both screens to `(cols, rows)`. `cursor_y` is
    /// the current cursor row *before* resizing; per `st.c`'s `tresize`, if
    /// shrinking the height would otherwise leave the cursor off-screen
    /// (`cursor_y - rows + 1 > 0`), that many rows slide off the top so the
    /// cursor's row lands back inside the grid instead of being silently
    /// truncated away. Returns the slide amount so the caller can clamp the
    /// cursor the same way `tmoveto` does afterward. New rows/columns are
    /// blank. The scroll region resets to the full new height. This core
    /// does not reflow wrapped lines on resize (Non-goal).
    pub fn resize(&mut self, cols: u16, rows: u16, cursor_y: u16) -> u16 {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let slide = (i32::from(cursor_y) - i32::from(rows) + 1).max(0) as u16;
        self.primary = Self::resize_screen(&self.primary, cols, rows, slide, self.default_fg, self.default_bg);
        self.alternate = Self::resize_screen(&self.alternate, cols, rows, slide, self.default_fg, self.default_bg);
        if cols != self.cols {
            let mut new_tabs = vec![false; cols as usize];
            let keep = self.tabs.len().min(new_tabs.len());
            new_tabs[..keep].copy_from_slice(&self.tabs[..keep]);
            self.tabs = new_tabs;
        }
        self.cols = cols;
        self.rows = rows;
        self.top = 0;
        self.bot = rows - 1;
        slide
    }

    /// Build the resized line storage for one screen: a window of the old
    /// rows starting at `slide`, each re-widened/truncated to `cols`, padded
    /// with fresh blanks where the window runs past the old content.
    fn resize_screen(old: &Screen, cols: u16, rows: u16, slide: u16, fg: Color, bg: Color) -> Screen {
        let mut lines = Vec::with_capacity(rows as usize);
        for y in 0..rows as usize {
            let mut row = vec![Cell::blank(fg, bg); cols as usize];
            if let Some(old_row) = old.lines.get(y + slide as usize) {
                let keep = old_row.len().min(row.len());
                row[..keep].copy_from_slice(&old_row[..keep]);
            }
            lines.push(row);
        }
        Screen { lines, dirty: vec![true; rows as usize] }
    }

    /// Clear the `WIDE`/`WDUMMY` pairing around `(x, y)` before overwriting
    /// either half, per the cell-placement invariant in SPEC_FULL.md §3.
    pub fn unpair_wide_glyph_at(&mut self, x: u16, y: u16, fg: Color, bg: Color) {
        let cols = self.cols;
        let cell = self.cell(x, y);
        if cell.flags.contains(CellFlags::WIDE) && x + 1 < cols {
            self.set_cell(x + 1, y, Cell::blank(fg, bg));
        } else if cell.flags.contains(CellFlags::WDUMMY) && x > 0 {
            self.set_cell(x - 1, y, Cell::blank(fg, bg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g() -> Grid { Grid::new(10, 5, Color::Default, Color::Default, 4) }

    #[test]
    fn new_grid_is_blank_and_full_scroll_region() {
        let grid = g();
        assert_eq!(grid.cols(), 10);
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.top(), 0);
        assert_eq!(grid.bot(), 4);
        assert_eq!(grid.cell(0, 0).ch, ' ');
    }

    #[test]
    fn tab_stops_every_four_columns() {
        let grid = g();
        assert_eq!(grid.next_tab(0), 4);
        assert_eq!(grid.next_tab(4), 8);
        assert_eq!(grid.next_tab(8), 9); // clamped to last column
    }

    #[test]
    fn scroll_up_then_down_restores_interior() {
        let mut grid = g();
        grid.set_cell(0, 2, Cell { ch: 'x', ..Cell::blank(Color::Default, Color::Default) });
        grid.scroll_up(0, 1, Color::Default, Color::Default);
        assert_eq!(grid.cell(0, 1).ch, 'x');
        grid.scroll_down(0, 1, Color::Default, Color::Default);
        assert_eq!(grid.cell(0, 2).ch, 'x');
    }

    #[test]
    fn scroll_up_full_region_blanks_everything() {
        let mut grid = g();
        grid.set_cell(0, 0, Cell { ch: 'x', ..Cell::blank(Color::Default, Color::Default) });
        grid.scroll_up(0, 5, Color::Default, Color::Default);
        for y in 0..5 {
            assert_eq!(grid.cell(0, y).ch, ' ');
        }
    }

    #[test]
    fn swap_screen_flips_active_and_marks_dirty() {
        let mut grid = g();
        grid.set_cell(0, 0, Cell { ch: 'x', ..Cell::blank(Color::Default, Color::Default) });
        assert!(!grid.is_alt_screen());
        grid.swap_screen();
        assert!(grid.is_alt_screen());
        assert_eq!(grid.cell(0, 0).ch, ' ');
        grid.swap_screen();
        assert_eq!(grid.cell(0, 0).ch, 'x');
    }

    #[test]
    fn insert_and_delete_char_roundtrip() {
        let mut grid = g();
        for (i, c) in "abcde".chars().enumerate() {
            grid.set_cell(i as u16, 0, Cell { ch: c, ..Cell::blank(Color::Default, Color::Default) });
        }
        grid.insert_blank(1, 0, 2, Color::Default, Color::Default);
        assert_eq!(grid.cell(0, 0).ch, 'a');
        assert_eq!(grid.cell(1, 0).ch, ' ');
        assert_eq!(grid.cell(3, 0).ch, 'b');
        grid.delete_char(1, 0, 2, Color::Default, Color::Default);
        assert_eq!(grid.cell(1, 0).ch, 'b');
    }

    #[test]
    fn resize_preserves_overlap_and_blanks_new_area() {
        let mut grid = g();
        grid.set_cell(0, 0, Cell { ch: 'x', ..Cell::blank(Color::Default, Color::Default) });
        grid.resize(20, 10, 0);
        assert_eq!(grid.cols(), 20);
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.cell(0, 0).ch, 'x');
        assert_eq!(grid.cell(15, 0).ch, ' ');
        assert_eq!(grid.top(), 0);
        assert_eq!(grid.bot(), 9);
    }

    #[test]
    fn shrinking_rows_slides_content_up_to_keep_cursor_onscreen() {
        let mut grid = g(); // 10x5
        for y in 0..5u16 {
            grid.set_cell(0, y, Cell { ch: (b'a' + y as u8) as char, ..Cell::blank(Color::Default, Color::Default) });
        }
        // Cursor sitting on the last row (y=4) before a shrink to 2 rows.
        let slide = grid.resize(10, 2, 4);
        assert_eq!(slide, 3); // 4 - 2 + 1
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cell(0, 0).ch, 'd');
        assert_eq!(grid.cell(0, 1).ch, 'e');
    }

    #[test]
    fn shrinking_rows_with_cursor_near_top_does_not_slide() {
        let mut grid = g(); // 10x5
        grid.set_cell(0, 0, Cell { ch: 'x', ..Cell::blank(Color::Default, Color::Default) });
        let slide = grid.resize(10, 2, 0);
        assert_eq!(slide, 0);
        assert_eq!(grid.cell(0, 0).ch, 'x');
    }
}
