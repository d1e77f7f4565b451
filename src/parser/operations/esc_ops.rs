//! Single-character `ESC` commands (outside CSI/OSC/STR), per SPEC_FULL.md
//! §4.5's "Within START" bullet list. Grounded on `st.c`'s `tcontrolcode`'s
//! ESC-final-byte switch.
//!
//! Charset designation (`ESC ( / ) / * / +` + final byte) and the DEC
//! screen-alignment test (`ESC # 8`) arrive here too, via `vte`'s
//! `intermediates` slot rather than a separate sub-state the crate has to
//! track itself (`vte` already collects the `(`/`)`/`*`/`+`/`#` intermediate
//! byte and hands it back alongside the final byte).

use crate::charset::{Charset, CharsetSlot};
use crate::host::HostHandler;
use crate::mode::TermMode;
use crate::term::TerminalState;

const DA_REPLY: &[u8] = crate::parser::codes::DA_REPLY;

pub fn dispatch<H: HostHandler>(state: &mut TerminalState<H>, intermediates: &[u8], byte: u8) {
    match intermediates.first() {
        Some(b'(') => return designate(state, CharsetSlot::G0, byte),
        Some(b')') => return designate(state, CharsetSlot::G1, byte),
        Some(b'*') => return designate(state, CharsetSlot::G2, byte),
        Some(b'+') => return designate(state, CharsetSlot::G3, byte),
        Some(b'#') => {
            if byte == b'8' {
                state.screen_alignment_test();
            }
            return;
        }
        _ => {}
    }

    match byte {
        b'D' => state.index_down(),
        b'E' => state.newline(true),
        b'H' => state.set_tab_here(),
        b'M' => state.reverse_index(),
        b'Z' => state.host.send(DA_REPLY),
        b'c' => {
            state.reset();
            state.host.reset_title();
            state.host.reset_colors();
        }
        b'=' => state.mode.insert(TermMode::APPKEYPAD),
        b'>' => state.mode.remove(TermMode::APPKEYPAD),
        b'7' => state.save_cursor(),
        b'8' => state.load_cursor(),
        b'\\' => {}
        b'k' => {
            // Legacy tektronix-style title set. `vte`'s grammar only enters
            // a string-collecting state for `]`/`P`/`X`/`^`/`_`, not `k`, so
            // the title text that would follow is not available here; this
            // sequence is long-superseded by OSC 2 in every real client.
            tracing::warn!("legacy ESC k title set is not representable through vte's grammar");
            state.host.log_unknown("ESC k (legacy title) unsupported");
        }
        other => {
            tracing::warn!(dispatch_char = %(other as char), "unknown ESC final byte");
            state.host.log_unknown(&format!("unknown ESC final byte {:?}", other as char));
        }
    }
}

fn designate<H: HostHandler>(state: &mut TerminalState<H>, slot: CharsetSlot, byte: u8) {
    state.designate_charset(slot, Charset::from_final_byte(byte));
}
