//! Terminal mode bitmask and the DEC-private / ANSI-standard mode tables.
//!
//! `TermMode` is grounded on `libsuckterm.h`'s `term_mode` enum. The private
//! and standard mode *numbers* (DEC mode 1, 1049, ANSI mode 4, etc.) are
//! modeled as closed enums per SPEC_FULL.md §9 ("CSI mode... should each be
//! a closed enumeration; the compiler must flag missing cases"), resolved
//! against `st.c`'s `tsetmode`.

bitflags::bitflags! {
    /// Terminal-wide mode flags. Named replacement for `term.mode`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TermMode: u32 {
        const WRAP              = 1 << 0;
        const INSERT            = 1 << 1;
        const APPKEYPAD         = 1 << 2;
        const ALTSCREEN         = 1 << 3;
        const CRLF               = 1 << 4;
        const MOUSEBTN          = 1 << 5;
        const MOUSEMOTION       = 1 << 6;
        const KBDLOCK           = 1 << 7;
        const ECHO               = 1 << 8;
        const APPCURSOR         = 1 << 9;
        const MOUSESGR          = 1 << 10;
        const BIT8               = 1 << 11;
        const BLINK               = 1 << 12;
        const FOCUS_BLINK       = 1 << 13;
        const FOCUS               = 1 << 14;
        const MOUSEX10          = 1 << 15;
        const MOUSEMANY         = 1 << 16;
        const BRACKETED_PASTE   = 1 << 17;
        const REVERSE_VIDEO     = 1 << 18;
        const CURSOR_VISIBLE    = 1 << 19;

        const MOUSE = Self::MOUSEBTN.bits() | Self::MOUSEMOTION.bits()
            | Self::MOUSEX10.bits() | Self::MOUSEMANY.bits();
    }
}

impl Default for TermMode {
    /// `treset()`'s initial mode set: wrap on, cursor visible, everything
    /// else off.
    fn default() -> Self { TermMode::WRAP | TermMode::CURSOR_VISIBLE }
}

/// DEC private modes (`CSI ? n h` / `CSI ? n l`), resolved against
/// `st.c`'s `tsetmode` private-mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrivateMode {
    /// 1 - DECCKM, application cursor keys.
    AppCursor,
    /// 5 - DECSCNM, reverse video.
    ReverseVideo,
    /// 6 - DECOM, origin mode.
    Origin,
    /// 7 - DECAWM, auto-wrap.
    AutoWrap,
    /// 9 - X10 mouse reporting.
    MouseX10,
    /// 25 - DECTCEM, cursor visibility.
    CursorVisible,
    /// 47 - legacy alternate-screen alias for 1047.
    AltScreen47,
    /// 1000 - VT200 mouse button tracking.
    MouseBtn,
    /// 1002 - button-event mouse tracking (adds motion while a button held).
    MouseMotion,
    /// 1003 - any-event mouse tracking.
    MouseMany,
    /// 1004 - focus in/out events.
    FocusEvents,
    /// 1006 - SGR extended mouse reporting.
    MouseSgr,
    /// 1034 - meta sends 8-bit / `BIT8`.
    Meta8Bit,
    /// 1047 - alternate screen, no cursor save/restore.
    AltScreen1047,
    /// 1048 - save/restore cursor only, no screen swap.
    SaveCursor,
    /// 1049 - alternate screen with cursor save/restore (saves on set,
    /// restores on reset; blanks the alternate screen on entry).
    AltScreenSaveCursor,
    /// 2004 - bracketed paste.
    BracketedPaste,
    /// A recognized-but-intentionally-inert DEC private mode: 0, 2, 3, 4, 8,
    /// 12, 18, 19, 42 per SPEC_FULL.md §4.7 ("Ignored privately").
    Ignored(u16),
    /// Any other numeric argument: unknown, logged and ignored.
    Unknown(u16),
}

impl From<u16> for PrivateMode {
    fn from(n: u16) -> Self {
        match n {
            1 => PrivateMode::AppCursor,
            5 => PrivateMode::ReverseVideo,
            6 => PrivateMode::Origin,
            7 => PrivateMode::AutoWrap,
            9 => PrivateMode::MouseX10,
            25 => PrivateMode::CursorVisible,
            47 => PrivateMode::AltScreen47,
            1000 => PrivateMode::MouseBtn,
            1002 => PrivateMode::MouseMotion,
            1003 => PrivateMode::MouseMany,
            1004 => PrivateMode::FocusEvents,
            1006 => PrivateMode::MouseSgr,
            1034 => PrivateMode::Meta8Bit,
            1047 => PrivateMode::AltScreen1047,
            1048 => PrivateMode::SaveCursor,
            1049 => PrivateMode::AltScreenSaveCursor,
            2004 => PrivateMode::BracketedPaste,
            0 | 2 | 3 | 4 | 8 | 12 | 18 | 19 | 42 => PrivateMode::Ignored(n),
            other => PrivateMode::Unknown(other),
        }
    }
}

/// ANSI-standard modes (`CSI n h` / `CSI n l`, no `?` prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiMode {
    /// 2 - KAM, keyboard action mode (lock keyboard).
    KeyboardLock,
    /// 4 - IRM, insert/replace mode.
    Insert,
    /// 12 - SRM, local echo. Note the sense is inverted: *setting* mode 12
    /// disables local echo (per `st.c`'s `tsetmode`, `MODE_ECHO` is cleared
    /// on `set` and set on `reset`).
    Echo,
    /// 20 - LNM, linefeed/new-line mode (CRLF).
    Crlf,
    Unknown(u16),
}

impl From<u16> for AnsiMode {
    fn from(n: u16) -> Self {
        match n {
            2 => AnsiMode::KeyboardLock,
            4 => AnsiMode::Insert,
            12 => AnsiMode::Echo,
            20 => AnsiMode::Crlf,
            other => AnsiMode::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_wrap_and_cursor_visible() {
        let m = TermMode::default();
        assert!(m.contains(TermMode::WRAP));
        assert!(m.contains(TermMode::CURSOR_VISIBLE));
        assert!(!m.contains(TermMode::INSERT));
    }

    #[test]
    fn mouse_union_covers_all_mouse_bits() {
        assert!(TermMode::MOUSE.contains(TermMode::MOUSEBTN));
        assert!(TermMode::MOUSE.contains(TermMode::MOUSEMOTION));
        assert!(TermMode::MOUSE.contains(TermMode::MOUSEX10));
        assert!(TermMode::MOUSE.contains(TermMode::MOUSEMANY));
    }

    #[test]
    fn private_mode_from_u16() {
        assert_eq!(PrivateMode::from(1049), PrivateMode::AltScreenSaveCursor);
        assert_eq!(PrivateMode::from(0), PrivateMode::Ignored(0));
        assert_eq!(PrivateMode::from(9999), PrivateMode::Unknown(9999));
    }
}
