//! VT102/xterm-compatible terminal emulator core: a byte-stream parser and
//! the 2D cell grid it drives.
//!
//! This crate is the engine, not the application: it owns no windowing, no
//! PTY file descriptor, and no palette/config table. A consumer implements
//! [`HostHandler`] to supply those and drives the core through
//! [`Terminal::feed`] with bytes read from a pseudo-terminal.
//!
//! ```
//! use vt102_core::{HostHandler, TerminalBuilder};
//!
//! #[derive(Default)]
//! struct Host;
//! impl HostHandler for Host {
//!     fn send(&mut self, _bytes: &[u8]) {}
//! }
//!
//! let mut term = TerminalBuilder::new(80, 24).build(Host::default()).unwrap();
//! term.feed(b"hello, world\r\n");
//! assert_eq!(term.state().grid().cell(0, 0).ch, 'h');
//! ```

pub mod builder;
pub mod cell;
pub mod charset;
pub mod codec;
pub mod color;
pub mod cursor;
pub mod error;
pub mod grid;
pub mod host;
pub mod mode;
pub mod mouse;
pub mod parser;
pub mod term;

pub use builder::TerminalBuilder;
pub use cell::{Cell, CellFlags};
pub use charset::{Charset, CharsetSlot};
pub use color::Color;
pub use cursor::{Cursor, CursorState, Pen, SavedCursor};
pub use error::{PaletteError, TermError};
pub use grid::Grid;
pub use host::{HostHandler, NullHostHandler, RecordingHostHandler};
pub use mode::{AnsiMode, PrivateMode, TermMode};
pub use mouse::{MouseEvent, MouseEventKind, Modifiers};
pub use term::{Terminal, TerminalState};
