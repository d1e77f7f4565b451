//! `CSI h` / `CSI l` (SM/RM): set/reset terminal modes, DEC-private and
//! ANSI-standard, per SPEC_FULL.md §4.7. Grounded on `st.c`'s `tsetmode`.

use crate::host::HostHandler;
use crate::mode::{AnsiMode, PrivateMode, TermMode};
use crate::term::TerminalState;

/// `CSI ? Pn h` / `CSI ? Pn l`: DEC private modes.
pub fn apply_private<H: HostHandler>(state: &mut TerminalState<H>, set: bool, args: &[u16]) {
    for &arg in args {
        match PrivateMode::from(arg) {
            PrivateMode::AppCursor => state.mode.set(TermMode::APPCURSOR, set),
            PrivateMode::ReverseVideo => {
                state.mode.set(TermMode::REVERSE_VIDEO, set);
                state.host.set_reverse_video(set);
            }
            PrivateMode::Origin => {
                state.cursor.state.set(crate::cursor::CursorState::ORIGIN, set);
                state.move_to(0, 0);
            }
            PrivateMode::AutoWrap => state.mode.set(TermMode::WRAP, set),
            PrivateMode::MouseX10 => {
                set_exclusive_mouse_mode(state, TermMode::MOUSEX10, set);
            }
            PrivateMode::CursorVisible => {
                state.mode.set(TermMode::CURSOR_VISIBLE, set);
                state.host.set_cursor_visibility(set);
            }
            PrivateMode::AltScreen47 | PrivateMode::AltScreen1047 => state.set_alt_screen(set),
            PrivateMode::MouseBtn => set_exclusive_mouse_mode(state, TermMode::MOUSEBTN, set),
            PrivateMode::MouseMotion => set_exclusive_mouse_mode(state, TermMode::MOUSEMOTION, set),
            PrivateMode::MouseMany => set_exclusive_mouse_mode(state, TermMode::MOUSEMANY, set),
            PrivateMode::FocusEvents => state.mode.set(TermMode::FOCUS, set),
            PrivateMode::MouseSgr => state.mode.set(TermMode::MOUSESGR, set),
            PrivateMode::Meta8Bit => state.mode.set(TermMode::BIT8, set),
            PrivateMode::SaveCursor => {
                if set {
                    state.save_cursor();
                } else {
                    state.load_cursor();
                }
            }
            // 1049: cursor save/restore in addition to the plain screen-swap
            // body shared with 47/1047 (DESIGN.md Open Question 5's
            // fallthrough, reproduced by explicit sequencing rather than
            // `match` fallthrough).
            PrivateMode::AltScreenSaveCursor => {
                if set {
                    state.save_cursor();
                    state.set_alt_screen(true);
                } else {
                    state.set_alt_screen(false);
                    state.load_cursor();
                }
            }
            PrivateMode::BracketedPaste => state.mode.set(TermMode::BRACKETED_PASTE, set),
            PrivateMode::Ignored(_) => {}
            PrivateMode::Unknown(n) => {
                tracing::warn!(mode = n, private = true, "unknown DEC private mode");
                state.host.log_unknown(&format!("unknown DEC private mode {n}"));
            }
        }
    }
}

/// Modes 9/1000/1002/1003 are mutually exclusive (SPEC_FULL.md §4.7); clear
/// the other three before installing `bit`, and notify `set_pointer_motion`
/// either way.
fn set_exclusive_mouse_mode<H: HostHandler>(state: &mut TerminalState<H>, bit: TermMode, set: bool) {
    if set {
        state.mode.remove(TermMode::MOUSEX10 | TermMode::MOUSEBTN | TermMode::MOUSEMOTION | TermMode::MOUSEMANY);
    }
    state.mode.set(bit, set);
    state.host.set_pointer_motion(set);
}

/// `CSI Pn h` / `CSI Pn l`: ANSI-standard modes (no `?` marker).
pub fn apply_ansi<H: HostHandler>(state: &mut TerminalState<H>, set: bool, args: &[u16]) {
    for &arg in args {
        match AnsiMode::from(arg) {
            AnsiMode::KeyboardLock => state.mode.set(TermMode::KBDLOCK, set),
            AnsiMode::Insert => state.mode.set(TermMode::INSERT, set),
            // Mode 12's sense is inverted: *setting* it disables local echo.
            AnsiMode::Echo => state.mode.set(TermMode::ECHO, !set),
            AnsiMode::Crlf => state.mode.set(TermMode::CRLF, set),
            AnsiMode::Unknown(n) => {
                tracing::warn!(mode = n, private = false, "unknown ANSI mode");
                state.host.log_unknown(&format!("unknown ANSI mode {n}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::host::NullHostHandler;
    use crate::mode::TermMode;
    use crate::term::Terminal;
    use test_case::test_case;

    fn term() -> Terminal<NullHostHandler> { Terminal::new(10, 5, crate::color::Color::Default, crate::color::Color::Default, 4, NullHostHandler) }

    #[test_case(1, TermMode::APPCURSOR; "decckm app cursor")]
    #[test_case(7, TermMode::WRAP; "decawm autowrap")]
    #[test_case(25, TermMode::CURSOR_VISIBLE; "dectcem cursor visible")]
    #[test_case(2004, TermMode::BRACKETED_PASTE; "bracketed paste")]
    fn private_mode_h_sets_then_l_clears_its_flag(mode: u16, flag: TermMode) {
        let mut t = term();
        t.feed(format!("\x1b[?{mode}h").as_bytes());
        assert!(t.state().mode().contains(flag), "mode {mode} should set {flag:?}");
        t.feed(format!("\x1b[?{mode}l").as_bytes());
        assert!(!t.state().mode().contains(flag), "mode {mode} should clear {flag:?}");
    }

    #[test]
    fn altscreen_1049_saves_and_restores_cursor_and_swaps_screen() {
        let mut t = term();
        t.feed(b"\x1b[?1049h");
        assert!(t.state().mode().contains(TermMode::ALTSCREEN));
        t.feed(b"X");
        t.feed(b"\x1b[?1049l");
        assert!(!t.state().mode().contains(TermMode::ALTSCREEN));
        assert_eq!(t.state().grid().cell(0, 0).ch, ' ');
    }

    #[test]
    fn exclusive_mouse_modes_clear_each_other() {
        let mut t = term();
        t.feed(b"\x1b[?1000h");
        assert!(t.state().mode().contains(TermMode::MOUSEBTN));
        t.feed(b"\x1b[?1003h");
        assert!(t.state().mode().contains(TermMode::MOUSEMANY));
        assert!(!t.state().mode().contains(TermMode::MOUSEBTN));
    }

    #[test]
    fn ansi_mode_12_inverts_echo() {
        let mut t = term();
        t.feed(b"\x1b[12h");
        assert!(!t.state().mode().contains(TermMode::ECHO));
        t.feed(b"\x1b[12l");
        assert!(t.state().mode().contains(TermMode::ECHO));
    }
}
