/**
 * A cursor over the code points of a pattern. The cursor starts before the
 * first code point, and once it reaches the last one it stays there, so
 * reading past the end is idempotent.
 */

use rr_intervals::IntervalSet;
use crate::error::{ErrorKind, ParseError, Radix, Result, printable};

pub const MAX_CODE_POINT: u32 = 0x10FFFF;
const SURROGATE_LOW: u32 = 0xD800;
const SURROGATE_HIGH: u32 = 0xDFFF;

/// A copy of the backtrackable part of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    index: Option<usize>,
    case_sensitive: bool,
}

#[derive(Debug, Clone)]
pub struct Cursor {
    buffer: Vec<char>,
    /// None before the first code point
    index: Option<usize>,
    pub case_sensitive: bool,
    captures: usize,
}

impl Cursor {
    pub fn new(buffer: Vec<char>) -> Self {
        // Groups are not parsed, so only the implicit group of the whole match
        // is ever defined
        Self{ buffer, index: None, case_sensitive: true, captures: 1 }
    }

    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    /// The index of the current code point, 0 before the first one.
    pub fn position(&self) -> usize {
        self.index.unwrap_or(0)
    }

    pub fn captures_count(&self) -> usize {
        self.captures
    }

    /// The current code point. The cursor must have been moved at least once.
    pub fn current(&self) -> char {
        match self.index {
            Some(idx) => self.buffer[idx],
            None => panic!("the cursor is before the first code point"),
        }
    }

    fn next_index(&self) -> usize {
        self.index.map_or(0, |i| i + 1)
    }

    pub fn has_next(&self) -> bool {
        self.next_index() < self.buffer.len()
    }

    pub fn peek_next(&self) -> Option<char> {
        self.buffer.get(self.next_index()).copied()
    }

    /// Steps to the next code point, returns false without moving if there is
    /// none.
    pub fn move_next(&mut self) -> bool {
        if self.has_next() {
            self.index = Some(self.next_index());
            true
        }
        else {
            false
        }
    }

    /// Steps only if the membership of the next code point in the set equals
    /// `include`.
    pub fn move_next_if(&mut self, set: &IntervalSet<char>, include: bool) -> bool {
        match self.peek_next() {
            Some(c) if set.contains(c) == include => self.move_next(),
            _ => false,
        }
    }

    /// Steps only if the next code point being `c` equals `include`.
    pub fn move_next_if_char(&mut self, c: char, include: bool) -> bool {
        match self.peek_next() {
            Some(n) if (n == c) == include => self.move_next(),
            _ => false,
        }
    }

    pub fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.position(), &self.buffer)
    }

    /**
     * Requirements.
     */

    /// Steps to the next code point or fails.
    pub fn require_next(&mut self, expected: &str) -> Result<char> {
        if self.move_next() {
            Ok(self.current())
        }
        else {
            Err(self.error(ErrorKind::UnexpectedEndOfInput{ expected: expected.to_string() }))
        }
    }

    pub fn require(&mut self, expected: char) -> Result<()> {
        let found = self.require_next(&format!("character {}", printable(&expected)))?;
        if found == expected {
            Ok(())
        }
        else {
            Err(self.error(ErrorKind::UnexpectedChar{ expected, found }))
        }
    }

    pub fn require_seq(&mut self, expected: &[char]) -> Result<()> {
        for c in expected {
            self.require(*c)?;
        }
        Ok(())
    }

    pub fn require_range(&mut self, lower: char, upper: char) -> Result<char> {
        let found = self.require_next(
            &format!("character in the range {} - {}", printable(&lower), printable(&upper)))?;
        if lower <= found && found <= upper {
            Ok(found)
        }
        else {
            Err(self.error(ErrorKind::OutOfRange{ lower, upper, found }))
        }
    }

    /// Requires `open`, runs the inner parser and requires `close` after it.
    /// The closing delimiter is only checked when the inner parser succeeded,
    /// so its error is not masked.
    pub fn scoped<T, F>(&mut self, open: &[char], close: &[char], inner: F) -> Result<T>
        where F : FnOnce(&mut Self) -> Result<T> {

        self.require_seq(open)?;
        let value = inner(self)?;
        self.require_seq(close)?;
        Ok(value)
    }

    /**
     * Backtracking.
     */

    pub fn snapshot(&self) -> Snapshot {
        Snapshot{ index: self.index, case_sensitive: self.case_sensitive }
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.index = snapshot.index;
        self.case_sensitive = snapshot.case_sensitive;
    }

    /**
     * Numeric literals, starting at the current code point.
     */

    fn current_digit(&self, radix: Radix) -> Option<u32> {
        self.index.and_then(|i| self.buffer[i].to_digit(radix.base()))
    }

    fn peek_digit(&self, radix: Radix) -> Option<u32> {
        self.peek_next().and_then(|c| c.to_digit(radix.base()))
    }

    /// Reads between `min` and `max` digits. `limit` is the largest value
    /// accepted, `on_overflow` decides what happens above it.
    fn read_number<F>(&mut self, radix: Radix, min: usize, max: usize, limit: u64, mut on_overflow: F)
        -> Result<u64> where F : FnMut(&Self, u64) -> Result<u64> {

        let first = match self.current_digit(radix) {
            Some(d) => d,
            None if min > 0 => return Err(self.error(ErrorKind::TooFewDigits{ radix, min })),
            None => return Ok(0),
        };

        let mut value = u64::from(first);
        let mut count = 1;
        while count < max {
            let digit = match self.peek_digit(radix) {
                Some(d) => d,
                None => break,
            };
            self.move_next();
            count += 1;
            value = value.saturating_mul(u64::from(radix.base())).saturating_add(u64::from(digit));
            if value > limit {
                value = on_overflow(self, value)?;
            }
        }

        if count < min {
            return Err(self.error(ErrorKind::TooFewDigits{ radix, min }));
        }
        Ok(value)
    }

    fn read_code_point(&mut self, radix: Radix, min: usize, max: usize) -> Result<char> {
        let limit = u64::from(MAX_CODE_POINT);
        let value = self.read_number(radix, min, max, limit, |cursor, value| {
            let shown = if value > u64::from(u32::max_value()) { u32::max_value() } else { value as u32 };
            Err(cursor.error(ErrorKind::InvalidCodePoint(shown)))
        })? as u32;

        if SURROGATE_LOW <= value && value <= SURROGATE_HIGH {
            return Err(self.error(ErrorKind::SurrogateNotAllowed(value)));
        }
        std::char::from_u32(value).ok_or_else(|| self.error(ErrorKind::InvalidCodePoint(value)))
    }

    pub fn read_octal(&mut self, min: usize, max: usize) -> Result<char> {
        self.read_code_point(Radix::Octal, min, max)
    }

    pub fn read_hex(&mut self, min: usize, max: usize) -> Result<char> {
        self.read_code_point(Radix::Hex, min, max)
    }

    /// Reads a decimal number, saturating instead of overflowing.
    pub fn read_decimal(&mut self, min: usize, max: usize) -> Result<usize> {
        let limit = usize::max_value() as u64;
        let value = self.read_number(Radix::Decimal, min, max, limit, |_, _| Ok(limit))?;
        Ok(value as usize)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
