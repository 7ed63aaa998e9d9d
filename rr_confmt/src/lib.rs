/**
 * Console formatting helpers: what the output surface can do, colors, and
 * caret diagnostics pointing into a source line.
 */

mod console;
mod diagnostic;
mod format;

pub use console::Capabilities;
pub use diagnostic::{caret_column, caret_diagnostic};
pub use format::{Col, Fmt, paint};
