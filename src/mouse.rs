//! Mouse event encoding: xterm legacy and SGR extended report formats.
//!
//! Grounded on `st.c`'s `mousereport` and the button/modifier encoding
//! described in SPEC_FULL.md §6 (`notify_mouse_event`).

use crate::mode::TermMode;

/// The kind of mouse event being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Press,
    Release,
    Motion,
}

/// Keyboard modifiers held during a mouse event, OR'd into the report
/// unless the active mode is X10 (which carries no modifier bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub meta: bool,
    pub control: bool,
}

impl Modifiers {
    fn bits(self) -> u16 {
        let mut b = 0;
        if self.shift {
            b |= 4;
        }
        if self.meta {
            b |= 8;
        }
        if self.control {
            b |= 16;
        }
        b
    }
}

/// A fully-described mouse event, pre-geometry-conversion (col/row are
/// already cell coordinates, 0-based; geometry conversion from pixels is a
/// host concern per SPEC_FULL.md §1 Non-goals).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub col: u16,
    pub row: u16,
    pub modifiers: Modifiers,
    pub button_index: u8,
}

/// Encode `event` into the wire bytes the active `mode` calls for, or
/// `None` if no mode wants this event reported (mouse reporting off, or
/// this event kind isn't enabled by the active tracking mode).
#[must_use]
pub fn encode_report(event: MouseEvent, mode: TermMode) -> Option<Vec<u8>> {
    if !mode.intersects(TermMode::MOUSE) {
        return None;
    }
    match event.kind {
        MouseEventKind::Motion => {
            if !mode.intersects(TermMode::MOUSEMOTION | TermMode::MOUSEMANY) {
                return None;
            }
        }
        MouseEventKind::Press | MouseEventKind::Release => {
            if !mode.intersects(TermMode::MOUSE) {
                return None;
            }
        }
    }

    let zero = event.button_index.saturating_sub(1);
    let mut button = if zero >= 3 { u16::from(zero) + 61 } else { u16::from(zero) };
    if event.kind == MouseEventKind::Motion {
        button += 32;
    }
    if !mode.contains(TermMode::MOUSEX10) {
        button |= event.modifiers.bits();
    }

    if mode.contains(TermMode::MOUSESGR) {
        let final_byte = if event.kind == MouseEventKind::Release { 'm' } else { 'M' };
        Some(format!("\x1b[<{};{};{}{}", button, event.col + 1, event.row + 1, final_byte).into_bytes())
    } else {
        if event.col >= 223 || event.row >= 223 {
            return None;
        }
        let b = if event.kind == MouseEventKind::Release { 3u16 } else { button };
        Some(vec![0x1b, b'[', b'M', 32 + b as u8, 32 + (event.col + 1) as u8, 32 + (event.row + 1) as u8])
    }
}

/// Encode a focus-in/out report (mode `FOCUS`): `ESC [I` / `ESC [O`.
#[must_use]
pub const fn encode_focus(focused: bool) -> &'static [u8] {
    if focused { b"\x1b[I" } else { b"\x1b[O" }
}
