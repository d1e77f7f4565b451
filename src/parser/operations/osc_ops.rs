//! OSC (Operating System Command) string dispatch, per SPEC_FULL.md §4.9.
//! Grounded on `st.c`'s `strhandle`'s OSC branch.

use crate::host::HostHandler;
use crate::parser::codes::{OSC_RESET_COLOR, OSC_SET_COLOR, OSC_SET_ICON_AND_TITLE, OSC_SET_ICON_NAME, OSC_SET_TITLE};
use crate::term::TerminalState;

/// `params` is `vte`'s already-`;`-split OSC argument list (raw bytes per
/// argument, since non-title OSC payloads like colour specs are not
/// necessarily valid UTF-8 on their own).
pub fn dispatch<H: HostHandler>(state: &mut TerminalState<H>, params: &[&[u8]]) {
    let Some(code) = params.first().and_then(|b| std::str::from_utf8(b).ok()).and_then(|s| s.parse::<u16>().ok()) else {
        tracing::warn!("OSC sequence missing a numeric sub-command");
        state.host.log_unknown("OSC sequence missing a numeric sub-command");
        return;
    };

    match code {
        OSC_SET_ICON_AND_TITLE | OSC_SET_ICON_NAME | OSC_SET_TITLE => {
            if let Some(title) = params.get(1).map(|b| String::from_utf8_lossy(b)) {
                state.host.set_title(&title);
            }
        }
        OSC_SET_COLOR => set_palette_entry(state, params),
        OSC_RESET_COLOR => reset_palette_entry(state, params),
        other => {
            tracing::warn!(osc = other, "unknown OSC sub-command");
            state.host.log_unknown(&format!("unknown OSC sub-command {other}"));
        }
    }
}

fn set_palette_entry<H: HostHandler>(state: &mut TerminalState<H>, params: &[&[u8]]) {
    let Some(index) = parse_index(params.get(1)) else {
        tracing::warn!("OSC 4: missing/invalid palette index");
        state.host.log_unknown("OSC 4: missing/invalid palette index");
        return;
    };
    let spec = params.get(2).map(|b| String::from_utf8_lossy(b).into_owned());
    if let Err(err) = state.host.set_color(index, spec.as_deref()) {
        tracing::warn!(index, %err, "OSC 4: set_color failed");
        state.host.log_unknown(&format!("OSC 4: set_color({index}) failed: {err}"));
    }
}

fn reset_palette_entry<H: HostHandler>(state: &mut TerminalState<H>, params: &[&[u8]]) {
    let Some(index) = parse_index(params.get(1)) else {
        tracing::warn!("OSC 104: missing/invalid palette index");
        state.host.log_unknown("OSC 104: missing/invalid palette index");
        return;
    };
    if let Err(err) = state.host.set_color(index, None) {
        tracing::warn!(index, %err, "OSC 104: reset failed");
        state.host.log_unknown(&format!("OSC 104: reset({index}) failed: {err}"));
    }
}

fn parse_index(raw: Option<&&[u8]>) -> Option<u8> {
    std::str::from_utf8(raw?).ok()?.parse::<u8>().ok()
}

#[cfg(test)]
mod tests {
    use crate::host::RecordingHostHandler;
    use crate::term::Terminal;

    fn term() -> Terminal<RecordingHostHandler> {
        Terminal::new(10, 5, crate::color::Color::Default, crate::color::Color::Default, 4, RecordingHostHandler::default())
    }

    #[test]
    fn osc_0_sets_title() {
        let mut t = term();
        t.feed(b"\x1b]0;my title\x07");
        assert_eq!(t.state().host.titles, vec!["my title".to_string()]);
    }

    #[test]
    fn osc_unknown_code_is_logged() {
        let mut t = term();
        t.feed(b"\x1b]999;whatever\x07");
        assert!(!t.state().host.unknown.is_empty());
    }
}
