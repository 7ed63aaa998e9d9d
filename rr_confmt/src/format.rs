/**
 * Structures related to formatting (color, style, ...).
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Col {
    White,
    Red,
    Green,
    Blue,
}

impl Col {
    fn fg_code(self) -> u8 {
        match self {
            Col::Red => 31,
            Col::Green => 32,
            Col::Blue => 34,
            Col::White => 37,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fmt {
    pub fg: Col,
    pub bold: bool,
}

impl Fmt {
    pub fn fg(fg: Col) -> Self {
        Self{ fg, bold: false }
    }

    pub fn bold(self) -> Self {
        Self{ bold: true, ..self }
    }
}

/// Wraps the text in ANSI escape sequences for the format, or returns it
/// untouched when the surface has no color.
pub fn paint(text: &str, fmt: Fmt, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    if fmt.bold {
        format!("\x1b[1;{}m{}\x1b[0m", fmt.fg.fg_code(), text)
    }
    else {
        format!("\x1b[{}m{}\x1b[0m", fmt.fg.fg_code(), text)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod format_tests {
    use super::*;

    #[test]
    fn disabled_is_identity() {
        assert_eq!(paint("abc", Fmt::fg(Col::Red), false), "abc");
    }

    #[test]
    fn colored() {
        assert_eq!(paint("abc", Fmt::fg(Col::Red), true), "\x1b[31mabc\x1b[0m");
        assert_eq!(paint("^", Fmt::fg(Col::Green).bold(), true), "\x1b[1;32m^\x1b[0m");
    }
}
