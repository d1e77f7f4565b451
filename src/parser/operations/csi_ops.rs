//! `CSI` final-byte dispatch (everything except SGR `m` and SM/RM `h`/`l`,
//! which get their own modules), per SPEC_FULL.md §4.6. Grounded on `st.c`'s
//! `csihandle`.

use crate::host::HostHandler;
use crate::parser::args;
use crate::term::TerminalState;
use vte::Params;

const DA_REPLY: &[u8] = crate::parser::codes::DA_REPLY;

/// Routes every CSI final byte this crate implements. `private` is whether
/// the sequence carried the DEC `?` marker (only relevant to a handful of
/// finals: `r`, and the mode table handled separately by the caller).
pub fn dispatch<H: HostHandler>(state: &mut TerminalState<H>, params: &Params, private: bool, final_byte: char) {
    let cols = state.cols();
    let rows = state.rows();
    let (fg, bg) = (state.default_fg, state.default_bg);
    let (cx, cy) = (state.cursor_x(), state.cursor_y());

    match final_byte {
        '@' => state.grid_mut().insert_blank(cx, cy, args::count_or(params, 0, 1), fg, bg),
        'A' => state.move_by(0, -i32::from(args::count_or(params, 0, 1))),
        'B' | 'e' => state.move_by(0, i32::from(args::count_or(params, 0, 1))),
        'C' | 'a' => state.move_by(i32::from(args::count_or(params, 0, 1)), 0),
        'D' => state.move_by(-i32::from(args::count_or(params, 0, 1)), 0),
        'E' => {
            let n = args::count_or(params, 0, 1);
            state.move_to(0, cy.saturating_add(n));
        }
        'F' => {
            let n = args::count_or(params, 0, 1);
            state.move_to(0, cy.saturating_sub(n));
        }
        'G' | '`' => state.move_to(args::count_or(params, 0, 1).saturating_sub(1), cy),
        'H' | 'f' => {
            let row = args::count_or(params, 0, 1).saturating_sub(1);
            let col = args::count_or(params, 1, 1).saturating_sub(1);
            state.move_abs(col, row);
        }
        'I' => state.tab_forward(args::count_or(params, 0, 1)),
        'Z' => state.tab_backward(args::count_or(params, 0, 1)),
        'J' => erase_in_display(state, args::raw(params, 0), cols, rows, cx, cy, fg, bg),
        'K' => erase_in_line(state, args::raw(params, 0), cols, cy, cx, fg, bg),
        'L' => insert_delete_lines(state, args::count_or(params, 0, 1), true),
        'M' => insert_delete_lines(state, args::count_or(params, 0, 1), false),
        'P' => state.grid_mut().delete_char(cx, cy, args::count_or(params, 0, 1), fg, bg),
        'S' => {
            let top = state.grid().top();
            state.grid_mut().scroll_up(top, args::count_or(params, 0, 1), fg, bg);
        }
        'T' => {
            let top = state.grid().top();
            state.grid_mut().scroll_down(top, args::count_or(params, 0, 1), fg, bg);
        }
        'X' => {
            let n = args::count_or(params, 0, 1);
            let x2 = cx.saturating_add(n.saturating_sub(1)).min(cols.saturating_sub(1));
            state.grid_mut().clear_region(cx, cy, x2, cy, fg, bg);
        }
        'd' => state.move_abs(cx, args::count_or(params, 0, 1).saturating_sub(1)),
        'c' => {
            if args::raw(params, 0) == 0 {
                state.host.send(DA_REPLY);
            }
        }
        'g' => match args::raw(params, 0) {
            0 => state.grid_mut().clear_tab(cx),
            3 => state.grid_mut().clear_all_tabs(),
            other => {
                tracing::warn!(arg = other, "unknown TBC argument");
                state.host.log_unknown(&format!("unknown TBC argument {other}"));
            }
        },
        'n' => {
            if args::raw(params, 0) == crate::parser::codes::DSR_CURSOR_POSITION {
                state.host.send(format!("\x1b[{};{}R", cy + 1, cx + 1).as_bytes());
            }
        }
        'r' => {
            if !private {
                let top = args::count_or(params, 0, 1).saturating_sub(1);
                let bot = args::count_or(params, 1, rows).saturating_sub(1);
                state.grid_mut().set_scroll_region(top, bot);
                state.move_abs(0, 0);
            }
        }
        's' => state.save_cursor(),
        'u' => state.load_cursor(),
        other => {
            tracing::warn!(dispatch_char = %other, "unknown CSI final byte");
            state.host.log_unknown(&format!("unknown CSI final byte {other:?}"));
        }
    }
}

fn erase_in_display<H: HostHandler>(
    state: &mut TerminalState<H>,
    mode: u16,
    cols: u16,
    rows: u16,
    cx: u16,
    cy: u16,
    fg: crate::color::Color,
    bg: crate::color::Color,
) {
    match mode {
        0 => {
            state.grid_mut().clear_region(cx, cy, cols - 1, cy, fg, bg);
            if cy + 1 < rows {
                state.grid_mut().clear_region(0, cy + 1, cols - 1, rows - 1, fg, bg);
            }
        }
        1 => {
            if cy > 0 {
                state.grid_mut().clear_region(0, 0, cols - 1, cy - 1, fg, bg);
            }
            state.grid_mut().clear_region(0, cy, cx, cy, fg, bg);
        }
        2 => state.grid_mut().clear_region(0, 0, cols - 1, rows - 1, fg, bg),
        other => {
            tracing::warn!(arg = other, "unknown ED argument");
            state.host.log_unknown(&format!("unknown ED argument {other}"));
        }
    }
}

fn erase_in_line<H: HostHandler>(state: &mut TerminalState<H>, mode: u16, cols: u16, cy: u16, cx: u16, fg: crate::color::Color, bg: crate::color::Color) {
    match mode {
        0 => state.grid_mut().clear_region(cx, cy, cols - 1, cy, fg, bg),
        1 => state.grid_mut().clear_region(0, cy, cx, cy, fg, bg),
        2 => state.grid_mut().clear_region(0, cy, cols - 1, cy, fg, bg),
        other => {
            tracing::warn!(arg = other, "unknown EL argument");
            state.host.log_unknown(&format!("unknown EL argument {other}"));
        }
    }
}

/// IL/DL (`L`/`M`): gated on the cursor being inside the scroll region.
fn insert_delete_lines<H: HostHandler>(state: &mut TerminalState<H>, n: u16, insert: bool) {
    let (top, bot) = (state.grid().top(), state.grid().bot());
    let cy = state.cursor_y();
    if cy < top || cy > bot {
        return;
    }
    let (fg, bg) = (state.default_fg, state.default_bg);
    if insert {
        state.grid_mut().insert_blank_line(cy, n, fg, bg);
    } else {
        state.grid_mut().delete_line(cy, n, fg, bg);
    }
}

#[cfg(test)]
mod tests {
    use crate::host::NullHostHandler;
    use crate::term::Terminal;

    fn term() -> Terminal<NullHostHandler> { Terminal::new(10, 5, crate::color::Color::Default, crate::color::Color::Default, 4, NullHostHandler) }

    #[test]
    fn cup_places_cursor_and_cell() {
        let mut t = term();
        t.feed(b"\x1b[3;5HX");
        assert_eq!(t.state().grid().cell(4, 2).ch, 'X');
        assert_eq!((t.state().cursor_x(), t.state().cursor_y()), (5, 2));
    }

    #[test]
    fn ed_clear_all() {
        let mut t = term();
        t.feed(b"hello\x1b[2J");
        assert_eq!(t.state().grid().cell(0, 0).ch, ' ');
    }

    #[test]
    fn el_clear_to_right() {
        let mut t = term();
        t.feed(b"hello\x1b[3G\x1b[K");
        assert_eq!(t.state().grid().cell(0, 0).ch, 'h');
        assert_eq!(t.state().grid().cell(2, 0).ch, ' ');
    }

    #[test]
    fn il_dl_gated_on_scroll_region() {
        let mut t = term();
        t.feed(b"\x1b[2;4r"); // region rows 2..4 (1-based)
        t.feed(b"\x1b[1;1HX"); // cursor row 0, outside region
        t.feed(b"\x1b[L"); // IL should no-op
        assert_eq!(t.state().grid().cell(0, 0).ch, 'X');
    }

    #[test]
    fn decstbm_moves_cursor_to_origin() {
        let mut t = term();
        t.feed(b"\x1b[5;5H\x1b[2;4r");
        assert_eq!((t.state().cursor_x(), t.state().cursor_y()), (0, 0));
    }

    #[test]
    fn da_replies_vt102id() {
        let mut t = crate::term::Terminal::new(10, 5, crate::color::Color::Default, crate::color::Color::Default, 4, crate::host::RecordingHostHandler::default());
        t.feed(b"\x1b[c");
        assert_eq!(t.state().host.sent, b"\x1b[?6c");
    }

    #[test]
    fn dsr_cursor_position_report() {
        let mut t = crate::term::Terminal::new(10, 5, crate::color::Color::Default, crate::color::Color::Default, 4, crate::host::RecordingHostHandler::default());
        t.feed(b"\x1b[4;8H\x1b[6n");
        assert_eq!(t.state().host.sent, b"\x1b[4;8R");
    }
}
