/**
 * Errors that abort a parse. Every error carries the normalized pattern and
 * the index of the offending code point in it, so a diagnostic can be printed
 * without parsing again.
 */

use rr_confmt::{Capabilities, caret_diagnostic};
use thiserror::Error;

/// Shows a character as itself if it is visible, as its hex code otherwise.
pub(crate) fn printable(c: &char) -> String {
    if c.is_control() || c.is_whitespace() {
        format!("0x{:X}", *c as u32)
    }
    else {
        c.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    pub fn base(self) -> u32 {
        match self {
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hex => "hex",
        })
    }
}

/// Legitimate regex features that are deliberately not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Feature {
    #[error("Start of string/line assertion has not been implemented")]
    StartAssertion,
    #[error("End of string/line assertion has not been implemented")]
    EndAssertion,
    #[error("Dot matching has not been implemented")]
    Dot,
    #[error("Character classes have not been implemented")]
    CharacterClasses,
    #[error("Groups/control verbs have not been implemented")]
    Groups,
    #[error("Assertions have not been implemented")]
    Assertions,
    #[error("Backreferences have not been implemented")]
    Backreferences,
    #[error("Unicode properties have not been implemented")]
    UnicodeProperties,
    #[error("Unicode extended grapheme clusters have not been implemented")]
    GraphemeClusters,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput{ expected: String },

    #[error("Expected character {}", printable(.expected))]
    UnexpectedChar{ expected: char, found: char },

    #[error("Character not in the required range {} - {}", printable(.lower), printable(.upper))]
    OutOfRange{ lower: char, upper: char, found: char },

    #[error("Expected {radix} digit")]
    TooFewDigits{ radix: Radix, min: usize },

    #[error("Value {0:#X} is not valid unicode")]
    InvalidCodePoint(u32),

    #[error("Surrogate escapes are not allowed")]
    SurrogateNotAllowed(u32),

    #[error("Invalid escape character {}", printable(.0))]
    InvalidEscapeCharacter(char),

    #[error("Cannot repeat {0}")]
    InvalidRepetition(&'static str),

    #[error("Cannot specify multiple quantifier modifiers at once")]
    DuplicateQuantifierModifier,

    #[error("Max cannot be less than min ({max} < {min})")]
    MaxLessThanMin{ min: usize, max: usize },

    #[error("{0}")]
    NotImplemented(Feature),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at normalized index {position}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub position: usize,
    pub pattern: Vec<char>,
}

pub type Result<T> = std::result::Result<T, ParseError>;

impl ParseError {
    pub fn new(kind: ErrorKind, position: usize, pattern: &[char]) -> Self {
        Self{ kind, position, pattern: pattern.to_vec() }
    }

    /// The message without the position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// True when the pattern is valid but uses an unsupported feature.
    pub fn is_not_implemented(&self) -> bool {
        match self.kind {
            ErrorKind::NotImplemented(_) => true,
            _ => false,
        }
    }

    /// The message, the pattern and a caret under the offending position.
    pub fn diagnostic(&self, caps: &Capabilities) -> String {
        caret_diagnostic(&self.message(), &self.pattern, self.position, caps)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod error_tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn display_includes_position() {
        let e = ParseError::new(ErrorKind::InvalidEscapeCharacter('q'), 3, &chars(r"ab\q"));
        assert_eq!(e.to_string(), "Invalid escape character q at normalized index 3");
        assert_eq!(e.message(), "Invalid escape character q");
    }

    #[test]
    fn unprintable_as_hex() {
        let kind = ErrorKind::UnexpectedChar{ expected: '\n', found: 'a' };
        assert_eq!(kind.to_string(), "Expected character 0xA");
        let kind = ErrorKind::OutOfRange{ lower: ' ', upper: '~', found: '\u{7f}' };
        assert_eq!(kind.to_string(), "Character not in the required range 0x20 - ~");
    }

    #[test]
    fn not_implemented_is_distinguished() {
        let e = ParseError::new(ErrorKind::NotImplemented(Feature::Groups), 0, &chars("("));
        assert!(e.is_not_implemented());
        assert_eq!(e.message(), "Groups/control verbs have not been implemented");
        let e = ParseError::new(ErrorKind::DuplicateQuantifierModifier, 0, &chars("a*??"));
        assert!(!e.is_not_implemented());
    }

    #[test]
    fn diagnostic_points_at_position() {
        let e = ParseError::new(ErrorKind::NotImplemented(Feature::Dot), 1, &chars("a.b"));
        assert_eq!(
            e.diagnostic(&Capabilities::plain()),
            "Dot matching has not been implemented\na.b\n ^"
        );
    }
}
