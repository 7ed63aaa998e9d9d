/**
 * A recursive-descent parser that turns a pattern into a regex AST.
 */

use rr_intervals::IntervalSet;
use unicode_normalization::UnicodeNormalization;
use crate::ast::{Modifier, Node, UNBOUNDED};
use crate::cursor::Cursor;
use crate::error::{ErrorKind, Feature, ParseError, Result};
use crate::pattern::ParseOptions;

/*
 * Reference grammar for the parser:
 *
 * alternatives ::=
 *                | sequence ('|' sequence)*
 *                ;
 *
 * sequence     ::=
 *                | (atom postfix*)*
 *                ;
 *
 * postfix      ::=
 *                | '*' | '+' | '?' | '{' DEC (',' DEC?)? '}'
 *                | '?' | '+'          (modifier, after a quantifier only)
 *                ;
 *
 * atom         ::=
 *                | '\' escape
 *                | ANY_NONSPECIAL_CHAR
 *                ;
 *
 * escape       ::=
 *                | 'Q' ANY* ('\' 'E')?
 *                | 'a' | 'e' | 'f' | 'n' | 'r' | 't'
 *                | 'c' PRINTABLE_ASCII
 *                | '0' OCT{0,2}
 *                | 'o' '{' OCT+ '}'
 *                | 'x' '{' HEX+ '}' | 'x' HEX{0,2}
 *                | 'N' '{' 'U' '+' HEX+ '}'
 *                | DEC DEC*           (octal, unless it is a backreference)
 *                | NON_ALPHANUMERIC
 *                ;
 */

/**
 * Actual parsing.
 */

/// Parses the pattern after normalizing it to NFC.
pub fn parse(source: &str, options: &ParseOptions) -> Result<Node> {
    parse_code_points(source.nfc().collect(), options)
}

/// Parses an already decoded pattern.
pub fn parse_code_points(buffer: Vec<char>, options: &ParseOptions) -> Result<Node> {
    let mut cursor = Cursor::new(buffer);
    cursor.case_sensitive = options.case_sensitive;

    let node = parse_alternatives(&mut cursor)?;
    tracing::debug!(
        code_points = cursor.buffer().len(),
        case_sensitive = options.case_sensitive,
        "parsed pattern"
    );
    Ok(node)
}

fn not_implemented(cursor: &Cursor, feature: Feature) -> ParseError {
    cursor.error(ErrorKind::NotImplemented(feature))
}

fn char_node(cursor: &Cursor, value: char) -> Node {
    Node::Char{ value, case_sensitive: cursor.case_sensitive }
}

fn parse_alternatives(cursor: &mut Cursor) -> Result<Node> {
    let terminators: IntervalSet<char> = std::iter::once('|').collect();

    let mut alternatives = Vec::new();
    loop {
        alternatives.push(parse_sequence(cursor, &terminators)?);
        if !cursor.has_next() {
            break;
        }
        cursor.require('|')?;
    }

    Ok(Node::alternates(alternatives))
}

fn parse_sequence(cursor: &mut Cursor, terminators: &IntervalSet<char>) -> Result<Node> {
    let mut nodes = Vec::new();

    while cursor.move_next_if(terminators, false) {
        match cursor.current() {
            '\\' => nodes.push(parse_escape(cursor, false)?),

            '^' => return Err(not_implemented(cursor, Feature::StartAssertion)),
            '$' => return Err(not_implemented(cursor, Feature::EndAssertion)),
            '.' => return Err(not_implemented(cursor, Feature::Dot)),
            '[' => return Err(not_implemented(cursor, Feature::CharacterClasses)),
            '(' => return Err(not_implemented(cursor, Feature::Groups)),

            c @ '*' | c @ '+' | c @ '?' | c @ '{' => apply_postfix(cursor, &mut nodes, c)?,

            c => nodes.push(char_node(cursor, c)),
        }
    }

    Ok(Node::sequence(nodes))
}

/**
 * Quantifiers. A node in the sequence goes from plain to quantified to
 * quantified with a modifier, every other transition is an error.
 */

fn apply_postfix(cursor: &mut Cursor, nodes: &mut Vec<Node>, c: char) -> Result<()> {
    let modifier = match c {
        '?' => Some(Modifier::Lazy),
        '+' => Some(Modifier::Possessive),
        _ => None,
    };

    if let (Some(modifier), Some(last)) = (modifier, nodes.last_mut()) {
        if let Node::Optional{ modifier: current, .. } | Node::Repeat{ modifier: current, .. } = last {
            if *current != Modifier::Greedy {
                return Err(cursor.error(ErrorKind::DuplicateQuantifierModifier));
            }
            tracing::trace!(?modifier, position = cursor.position(), "quantifier modifier");
            *current = modifier;
            return Ok(());
        }
    }

    let last = match nodes.last_mut() {
        None => return Err(cursor.error(ErrorKind::InvalidRepetition("nothing"))),
        Some(node) if !node.is_repeatable() =>
            return Err(cursor.error(ErrorKind::InvalidRepetition("a quantified or composite expression"))),
        Some(node) => node,
    };

    let (min, max) = match c {
        '*' => (0, UNBOUNDED),
        '+' => (1, UNBOUNDED),
        '?' => {
            wrap(last, |node| Node::Optional{ node, modifier: Modifier::Greedy });
            return Ok(());
        },
        _ => parse_bounds(cursor)?,
    };

    tracing::trace!(min, max, position = cursor.position(), "quantifier");
    wrap(last, |node| Node::Repeat{ node, min, max, modifier: Modifier::Greedy });
    Ok(())
}

/// Replaces the node in place with a wrapper around it.
fn wrap<F>(slot: &mut Node, wrapper: F) where F : FnOnce(Box<Node>) -> Node {
    let inner = std::mem::replace(slot, Node::empty());
    *slot = wrapper(Box::new(inner));
}

/// Parses the rest of `{m}`, `{m,}` or `{m,n}`, the '{' is already consumed.
fn parse_bounds(cursor: &mut Cursor) -> Result<(usize, usize)> {
    cursor.scoped(&[], &['}'], |cursor| {
        cursor.require_next("repetition count")?;
        let min = cursor.read_decimal(1, usize::max_value())?;

        if !cursor.move_next_if_char(',', true) {
            return Ok((min, min));
        }
        if !cursor.move_next_if_char('}', false) {
            // A huge min still has to be met in full
            return Ok((min, min.max(UNBOUNDED)));
        }

        let max = cursor.read_decimal(1, usize::max_value())?;
        if max < min {
            return Err(cursor.error(ErrorKind::MaxLessThanMin{ min, max }));
        }
        Ok((min, max))
    })
}

/**
 * Escapes. The backslash is the current code point.
 */

pub(crate) fn parse_escape(cursor: &mut Cursor, in_character_class: bool) -> Result<Node> {
    let c = cursor.require_next("escape character")?;
    tracing::trace!(escape = %c, position = cursor.position(), "escape");

    if !c.is_alphanumeric() {
        return Ok(char_node(cursor, c));
    }

    let value = match c {
        'Q' => return Ok(parse_literal(cursor)),

        'a' => '\x07',
        'e' => '\x1B',
        'f' => '\x0C',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',

        'c' => {
            // Uppercase, then flip bit 6
            let c = cursor.require_range(' ', '~')?;
            ((c.to_ascii_uppercase() as u8) ^ 0x40) as char
        },

        '0' => cursor.read_octal(1, 3)?,

        'o' => cursor.scoped(&['{'], &['}'], |cursor| {
            cursor.require_next("octal digit")?;
            cursor.read_octal(1, usize::max_value())
        })?,

        'x' => match cursor.peek_next() {
            Some('{') => cursor.scoped(&['{'], &['}'], |cursor| {
                cursor.require_next("hex digit")?;
                cursor.read_hex(1, usize::max_value())
            })?,
            Some(n) if n.is_ascii_hexdigit() => {
                cursor.move_next();
                cursor.read_hex(1, 2)?
            },
            _ => '\0',
        },

        'N' => match cursor.peek_next() {
            Some('{') => cursor.scoped(&['{', 'U', '+'], &['}'], |cursor| {
                cursor.require_next("hex digit")?;
                cursor.read_hex(1, usize::max_value())
            })?,
            // Bare \N is "any character but newline"
            _ => return Err(not_implemented(cursor, Feature::CharacterClasses)),
        },

        'b' if in_character_class => '\x08',
        'b' => return Err(not_implemented(cursor, Feature::Assertions)),

        'g' => return Err(not_implemented(cursor, Feature::Backreferences)),

        'd' | 'D' | 'h' | 'H' | 's' | 'S' | 'v' | 'V' | 'w' | 'W' | 'C' =>
            return Err(not_implemented(cursor, Feature::CharacterClasses)),

        'p' | 'P' => return Err(not_implemented(cursor, Feature::UnicodeProperties)),

        'X' => return Err(not_implemented(cursor, Feature::GraphemeClusters)),

        'R' if in_character_class => return Err(not_implemented(cursor, Feature::CharacterClasses)),

        // Meaningless inside a class, so they match nothing extra there
        'B' | 'A' | 'Z' | 'z' | 'G' if in_character_class => return Ok(Node::empty()),
        'B' | 'A' | 'Z' | 'z' | 'G' => return Err(not_implemented(cursor, Feature::Assertions)),

        '8' | '9' if in_character_class => c,
        '1'..='7' if in_character_class => cursor.read_octal(1, 3)?,
        '1'..='9' => return parse_numeric_escape(cursor),

        _ => return Err(cursor.error(ErrorKind::InvalidEscapeCharacter(c))),
    };

    Ok(char_node(cursor, value))
}

/// A decimal escape outside of a character class is either a backreference or
/// an octal escape. That can only be told after reading every digit.
fn parse_numeric_escape(cursor: &mut Cursor) -> Result<Node> {
    let snapshot = cursor.snapshot();

    let first_digit = cursor.current() as usize - '0' as usize;
    let value = cursor.read_decimal(1, usize::max_value())?;

    // Referencing capture 0 is handled by '\0' being octal
    cursor.restore(snapshot);
    if value < 10 || first_digit > 7 || value < cursor.captures_count() {
        return Err(not_implemented(cursor, Feature::Backreferences));
    }

    tracing::trace!(value, position = cursor.position(), "decimal escape re-read as octal");
    let value = cursor.read_octal(1, 3)?;
    Ok(char_node(cursor, value))
}

/// Everything up to '\E' or the end of the pattern, taken literally.
fn parse_literal(cursor: &mut Cursor) -> Node {
    let mut value = Vec::new();
    while cursor.move_next() {
        let c = cursor.current();
        if c == '\\' && cursor.move_next_if_char('E', true) {
            break;
        }
        value.push(c);
    }
    Node::String{ value, case_sensitive: cursor.case_sensitive }
}

// Tests ///////////////////////////////////////////////////////////////////////
