//! The `vte::Perform` implementation: the thin shim between `vte`'s
//! tokenizer callbacks and the `operations::*` modules that actually mutate
//! [`TerminalState`]. Grounded on the teacher's `vt_100_ansi_parser`
//! `Performer`/`AnsiParser` split (one struct implementing the callback
//! trait, delegating every branch to a dedicated handler function) and on
//! `st.c`'s `tputc`, which is this same dispatch collapsed into one function.

use crate::host::HostHandler;
use crate::mode::TermMode;
use crate::parser::args;
use crate::parser::operations::{csi_ops, esc_ops, mode_ops, osc_ops, sgr_ops};
use crate::term::TerminalState;
use vte::{Params, Perform};

/// Borrows a [`TerminalState`] for the duration of one [`vte::Parser::advance`]
/// call (or one batch of them, inside [`crate::term::Terminal::feed`]).
pub struct Performer<'a, H: HostHandler> {
    state: &'a mut TerminalState<H>,
}

impl<'a, H: HostHandler> Performer<'a, H> {
    pub fn new(state: &'a mut TerminalState<H>) -> Self { Performer { state } }
}

impl<H: HostHandler> Perform for Performer<'_, H> {
    /// The printable-character path: charset-translate, measure, place.
    fn print(&mut self, ch: char) {
        let translated = self.state.active_charset().translate(ch);
        let width = crate::codec::display_width(translated);
        if width == 0 {
            return;
        }
        self.state.print_char(translated, width);
    }

    /// C0 control codes, per `st.c`'s `tcontrolcode`.
    fn execute(&mut self, byte: u8) {
        match byte {
            0x00 | 0x11 | 0x13 => {} // NUL, XON, XOFF: no-ops here.
            0x05 => tracing::debug!("ENQ received (answerback not implemented)"),
            0x07 => self.state.host.bell(),
            0x08 => self.state.move_by(-1, 0),
            0x09 => self.state.tab_forward(1),
            0x0a | 0x0b | 0x0c => self.state.newline(self.state.mode().contains(TermMode::CRLF)),
            0x0d => {
                let y = self.state.cursor_y();
                self.state.move_to(0, y);
            }
            0x0e => {
                self.state.select_shift_out();
                self.state.sync_active_charset();
            }
            0x0f => {
                self.state.select_shift_in();
                self.state.sync_active_charset();
            }
            0x18 | 0x1a => {} // CAN, SUB: `vte` already aborted the in-flight sequence.
            0x7f => {} // DEL: traditionally discarded.
            other => {
                tracing::debug!(byte = other, "unhandled C0 control code");
                self.state.host.log_unknown(&format!("unhandled C0 control code {other:#04x}"));
            }
        }
    }

    /// `CSI` final byte: route SGR and SM/RM to their own modules (they need
    /// the full argument list, not just one final byte), everything else to
    /// [`csi_ops::dispatch`].
    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        if ignore {
            // Malformed/overlong sequence. `vte` sets this when more than 32
            // parameters or two intermediates were seen; discarding rather
            // than dispatching matches every mainstream terminal emulator.
            tracing::warn!(%action, "discarding CSI sequence flagged `ignore` by vte");
            self.state.host.log_unknown(&format!("discarded malformed CSI sequence ending in {action:?}"));
            return;
        }

        let private = args::is_private(intermediates);

        match action {
            'm' => sgr_ops::apply(self.state, params),
            'h' => {
                let args = args::flatten(params);
                if private {
                    mode_ops::apply_private(self.state, true, &args);
                } else {
                    mode_ops::apply_ansi(self.state, true, &args);
                }
            }
            'l' => {
                let args = args::flatten(params);
                if private {
                    mode_ops::apply_private(self.state, false, &args);
                } else {
                    mode_ops::apply_ansi(self.state, false, &args);
                }
            }
            other => csi_ops::dispatch(self.state, params, private, other),
        }
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], ignore: bool, byte: u8) {
        if ignore {
            tracing::warn!(byte, "discarding malformed ESC sequence flagged `ignore` by vte");
            self.state.host.log_unknown(&format!("discarded malformed ESC sequence ending in {:?}", byte as char));
            return;
        }
        esc_ops::dispatch(self.state, intermediates, byte);
    }

    /// OSC: `vte` hands back the `;`-split argument list as raw byte slices.
    fn osc_dispatch(&mut self, params: &[&[u8]], _bell_terminated: bool) { osc_ops::dispatch(self.state, params); }

    /// DCS (`ESC P ... ESC \`): logged only, per SPEC_FULL.md §4.9 — no
    /// terminal-emulation feature this crate implements is carried inside a
    /// DCS string.
    fn hook(&mut self, params: &Params, intermediates: &[u8], _ignore: bool, action: char) {
        let args = args::flatten(params);
        tracing::debug!(?args, ?intermediates, %action, "DCS hook (logged only)");
        self.state.host.log_unknown(&format!("DCS sequence opened (final byte {action:?}), not interpreted"));
    }

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}
}
