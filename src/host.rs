//! The host collaborator interface: callbacks the core invokes, and the
//! outbound-byte channel it writes replies through.
//!
//! Grounded on `libsuckterm.h`'s callback declarations (`bell`, `settitle`,
//! `resettitle`, `resetcolors`, `set_cursor_visibility`, `set_reverse_video`,
//! `set_pointer_motion`, `set_urgency`, `xsetcolorname`) and on SPEC_FULL.md
//! §6/§11, which asks for this surface as an injected trait object rather
//! than function pointers so the host can be a plain struct with no
//! unsafe `extern "C"` boundary.

use crate::error::PaletteError;

/// Everything the parser/terminal core needs to push back out to its host:
/// pseudo-terminal writes, and UI notifications. A host implements this
/// once per terminal instance and hands it to [`crate::term::Terminal`].
pub trait HostHandler {
    /// Bytes to be written to the pseudo-terminal (DA/DSR replies, the
    /// echo path). Ordered relative to the input byte that produced them.
    fn send(&mut self, bytes: &[u8]);

    /// Audible/visible bell.
    fn bell(&mut self) {}

    /// OSC 0/1/2: window title changed.
    fn set_title(&mut self, _title: &str) {}

    /// ESC c (RIS): restore the host's default window title.
    fn reset_title(&mut self) {}

    /// ESC c (RIS): restore the palette to compiled-in defaults.
    fn reset_colors(&mut self) {}

    fn set_cursor_visibility(&mut self, _visible: bool) {}

    /// DECSCNM: toggle whole-screen inverse rendering.
    fn set_reverse_video(&mut self, _reverse: bool) {}

    /// Enable/disable delivery of pointer-motion events to the core.
    fn set_pointer_motion(&mut self, _enabled: bool) {}

    fn set_urgency(&mut self, _urgent: bool) {}

    /// OSC 4 / 104: set (`Some`) or reset (`None`) palette slot `index` to
    /// `spec` (an X11-style colour name). Parsing the spec string itself is
    /// a host/config concern (Non-goal here), so the default stub always
    /// succeeds; a real host returns `Err` on a bad index or unparsable
    /// spec, which the parser layer logs without otherwise altering state.
    fn set_color(&mut self, _index: u8, _spec: Option<&str>) -> Result<(), PaletteError> { Ok(()) }

    /// Diagnostic sink for unknown/malformed sequences. Never affects
    /// parsing; purely informative.
    fn log_unknown(&mut self, _description: &str) {}
}

/// A [`HostHandler`] that discards every notification and every byte
/// written to the pseudo-terminal. Useful for tests and for embedding the
/// core where replies are intentionally unwanted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHostHandler;

impl HostHandler for NullHostHandler {
    fn send(&mut self, _bytes: &[u8]) {}
}

/// A [`HostHandler`] that records everything for inspection, for use in
/// tests that need to assert on replies/callbacks.
#[derive(Debug, Default)]
pub struct RecordingHostHandler {
    pub sent: Vec<u8>,
    pub bells: u32,
    pub titles: Vec<String>,
    pub unknown: Vec<String>,
}

impl HostHandler for RecordingHostHandler {
    fn send(&mut self, bytes: &[u8]) { self.sent.extend_from_slice(bytes); }

    fn bell(&mut self) { self.bells += 1; }

    fn set_title(&mut self, title: &str) { self.titles.push(title.to_string()); }

    fn log_unknown(&mut self, description: &str) { self.unknown.push(description.to_string()); }
}
