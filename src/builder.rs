//! Builder-style construction for [`Terminal`], mirroring the teacher's
//! preference for builder constructors over long positional argument lists
//! (SPEC_FULL.md §11).

use crate::color::Color;
use crate::error::TermError;
use crate::host::HostHandler;
use crate::term::Terminal;

/// Default tab-stop interval, matching `original_source/st.c`'s compiled-in
/// default.
const DEFAULT_TABSPACES: u16 = 8;

/// Accumulates terminal-construction parameters before handing them, plus a
/// [`HostHandler`], to [`TerminalBuilder::build`].
#[derive(Debug, Clone, Copy)]
pub struct TerminalBuilder {
    cols: u16,
    rows: u16,
    default_fg: Color,
    default_bg: Color,
    tabspaces: u16,
}

impl TerminalBuilder {
    /// Start a builder for a `cols x rows` grid. Colours default to
    /// [`Color::Default`]; tab stops default to every 8 columns.
    #[must_use]
    pub fn new(cols: u16, rows: u16) -> Self {
        TerminalBuilder { cols, rows, default_fg: Color::Default, default_bg: Color::Default, tabspaces: DEFAULT_TABSPACES }
    }

    #[must_use]
    pub fn default_fg(mut self, fg: Color) -> Self {
        self.default_fg = fg;
        self
    }

    #[must_use]
    pub fn default_bg(mut self, bg: Color) -> Self {
        self.default_bg = bg;
        self
    }

    #[must_use]
    pub fn tabspaces(mut self, tabspaces: u16) -> Self {
        self.tabspaces = tabspaces;
        self
    }

    /// Build the [`Terminal`], handing it ownership of `host`. Fails only if
    /// `cols` or `rows` is zero.
    pub fn build<H: HostHandler>(self, host: H) -> Result<Terminal<H>, TermError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(TermError::InvalidDimensions { cols: self.cols, rows: self.rows });
        }
        Ok(Terminal::new(self.cols, self.rows, self.default_fg, self.default_bg, self.tabspaces, host))
    }
}
