/**
 * Parses a regular expression and draws random strings it would match.
 */

mod ast;
mod cursor;
mod error;
mod parser;
mod pattern;

pub use ast::{Modifier, Node, Sample, UNBOUNDED};
pub use cursor::{Cursor, Snapshot, MAX_CODE_POINT};
pub use error::{ErrorKind, Feature, ParseError, Radix, Result};
pub use parser::{parse, parse_code_points};
pub use pattern::{ParseOptions, Pattern};
