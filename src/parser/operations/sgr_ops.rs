//! `CSI m` (SGR): compose the current pen from a flattened argument stream,
//! per SPEC_FULL.md §4.8. Grounded on `st.c`'s `tsetattr`.

use crate::cell::CellFlags;
use crate::color::Color;
use crate::host::HostHandler;
use crate::parser::args;
use crate::term::TerminalState;
use vte::Params;

const EXTENDED_RGB: u16 = 2;
const EXTENDED_INDEXED: u16 = 5;

pub fn apply<H: HostHandler>(state: &mut TerminalState<H>, params: &Params) {
    let flat = args::flatten(params);
    let mut i = 0;
    while i < flat.len() {
        let arg = flat[i];
        match arg {
            0 => state.pen_mut().reset_to_defaults(state.default_fg, state.default_bg),
            1 => state.pen_mut().flags.insert(CellFlags::BOLD),
            3 => state.pen_mut().flags.insert(CellFlags::ITALIC),
            4 => state.pen_mut().flags.insert(CellFlags::UNDERLINE),
            5 | 6 => state.pen_mut().flags.insert(CellFlags::BLINK),
            7 => state.pen_mut().flags.insert(CellFlags::REVERSE),
            21 | 22 => state.pen_mut().flags.remove(CellFlags::BOLD),
            23 => state.pen_mut().flags.remove(CellFlags::ITALIC),
            24 => state.pen_mut().flags.remove(CellFlags::UNDERLINE),
            25 | 26 => state.pen_mut().flags.remove(CellFlags::BLINK),
            27 => state.pen_mut().flags.remove(CellFlags::REVERSE),
            30..=37 => state.pen_mut().fg = Color::Indexed((arg - 30) as u8),
            40..=47 => state.pen_mut().bg = Color::Indexed((arg - 40) as u8),
            90..=97 => state.pen_mut().fg = Color::bright((arg - 90) as u8),
            100..=107 => state.pen_mut().bg = Color::bright((arg - 100) as u8),
            39 => state.pen_mut().fg = Color::Default,
            49 => state.pen_mut().bg = Color::Default,
            38 | 48 => {
                let consumed = apply_extended(state, &flat[i + 1..], arg == 38);
                i += consumed;
            }
            other => {
                tracing::warn!(sgr = other, "unknown SGR argument");
                state.host.log_unknown(&format!("unknown SGR argument {other}"));
            }
        }
        i += 1;
    }
}

/// Consume `38`/`48`'s sub-arguments (already past the `38`/`48` itself) and
/// apply the resulting colour to fg (`is_fg`) or bg. Returns how many extra
/// slots were consumed so the caller can advance its own index past them.
/// Malformed forms log and leave the colour untouched (SPEC_FULL.md §4.8).
fn apply_extended<H: HostHandler>(state: &mut TerminalState<H>, rest: &[u16], is_fg: bool) -> usize {
    match rest.first() {
        Some(&EXTENDED_RGB) if rest.len() >= 4 => {
            match (u8::try_from(rest[1]), u8::try_from(rest[2]), u8::try_from(rest[3])) {
                (Ok(r), Ok(g), Ok(b)) => {
                    let color = Color::Rgb(r, g, b);
                    if is_fg { state.pen_mut().fg = color; } else { state.pen_mut().bg = color; }
                }
                _ => {
                    tracing::warn!(is_fg, "out-of-range truecolor SGR component");
                    state.host.log_unknown("out-of-range truecolor SGR component (38/48;2)");
                }
            }
            4
        }
        Some(&EXTENDED_INDEXED) if rest.len() >= 2 => {
            let color = Color::Indexed(rest[1] as u8);
            if is_fg { state.pen_mut().fg = color; } else { state.pen_mut().bg = color; }
            2
        }
        _ => {
            tracing::warn!(is_fg, "malformed extended SGR colour");
            state.host.log_unknown("malformed extended SGR colour (38/48)");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Color;
    use crate::host::NullHostHandler;
    use crate::term::Terminal;
    use test_case::test_case;

    fn term() -> Terminal<NullHostHandler> { Terminal::new(10, 5, Color::Default, Color::Default, 4, NullHostHandler) }

    #[test_case(30, 0; "black")]
    #[test_case(31, 1; "red")]
    #[test_case(32, 2; "green")]
    #[test_case(33, 3; "yellow")]
    #[test_case(34, 4; "blue")]
    #[test_case(35, 5; "magenta")]
    #[test_case(36, 6; "cyan")]
    #[test_case(37, 7; "white")]
    fn standard_fg_codes_map_to_their_palette_index(code: u16, index: u8) {
        let mut t = term();
        t.feed(format!("\x1b[{code}mA").as_bytes());
        assert_eq!(t.state().grid().cell(0, 0).fg, Color::Indexed(index));
    }

    #[test]
    fn basic_fg_color_and_reset() {
        let mut t = term();
        t.feed(b"\x1b[31mA\x1b[0mB");
        assert_eq!(t.state().grid().cell(0, 0).fg, Color::Indexed(1));
        assert_eq!(t.state().grid().cell(1, 0).fg, Color::Default);
    }

    #[test]
    fn truecolor_extended_fg() {
        let mut t = term();
        t.feed(b"\x1b[38;2;10;20;30mA");
        assert_eq!(t.state().grid().cell(0, 0).fg, Color::Rgb(10, 20, 30));
    }

    #[test]
    fn indexed_extended_bg() {
        let mut t = term();
        t.feed(b"\x1b[48;5;200mA");
        assert_eq!(t.state().grid().cell(0, 0).bg, Color::Indexed(200));
    }

    #[test]
    fn bright_fg_adds_eight() {
        let mut t = term();
        t.feed(b"\x1b[91mA");
        assert_eq!(t.state().grid().cell(0, 0).fg, Color::Indexed(9));
    }

    #[test]
    fn malformed_extended_leaves_color_unchanged() {
        let mut t = term();
        t.feed(b"\x1b[38;9mA");
        assert_eq!(t.state().grid().cell(0, 0).fg, Color::Default);
    }

    #[test]
    fn truecolor_out_of_range_component_leaves_color_unchanged() {
        let mut t = term();
        t.feed(b"\x1b[38;2;300;20;30mA");
        assert_eq!(t.state().grid().cell(0, 0).fg, Color::Default);
    }

    #[test]
    fn composition_reapplies_after_reset() {
        let mut t = term();
        t.feed(b"\x1b[1;31mA");
        let cell = t.state().grid().cell(0, 0);
        assert!(cell.flags.contains(crate::cell::CellFlags::BOLD));
        assert_eq!(cell.fg, Color::Indexed(1));
    }
}
