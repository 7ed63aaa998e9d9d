/**
 * Interaction with the console the app is running in.
 */

use std::io::IsTerminal;

/// What the surface diagnostics are written to is able to do. Probed once by
/// the caller and handed to every renderer explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Combining marks are drawn on top of their base character, so a
    /// grapheme cluster takes up a single column.
    pub merges_combining: bool,
    /// ANSI escape sequences are understood.
    pub color: bool,
}

impl Capabilities {
    /// No color, and every code point takes its own column.
    pub fn plain() -> Self {
        Self{ merges_combining: false, color: false }
    }

    /// Probes standard error.
    pub fn detect() -> Self {
        let term = std::env::var("TERM").ok();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::from_probe(std::io::stderr().is_terminal(), term.as_deref(), no_color)
    }

    fn from_probe(is_terminal: bool, term: Option<&str>, no_color: bool) -> Self {
        if !is_terminal {
            // Assume it is being written to a file, where an editor will
            // draw the clusters properly
            return Self{ merges_combining: true, color: false };
        }

        let dumb = match term {
            None | Some("") | Some("dumb") => true,
            _ => false,
        };
        Self{ merges_combining: !dumb, color: !dumb && !no_color }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
