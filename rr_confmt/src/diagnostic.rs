/**
 * Caret diagnostics: a message, the offending source line and a '^' under the
 * offending code point.
 */

use unicode_segmentation::UnicodeSegmentation;
use crate::console::Capabilities;
use crate::format::{Col, Fmt, paint};

/// The column the caret has to go to so that it ends up under the code point
/// at `position`. When the surface merges combining marks, every extended
/// grapheme cluster is a single column and a position inside a cluster points
/// at the cluster itself.
pub fn caret_column(source: &[char], position: usize, merges_combining: bool) -> usize {
    if !merges_combining {
        return position;
    }

    let text: String = source.iter().collect();
    let mut seen = 0;
    let mut column = 0;
    for grapheme in text.graphemes(true) {
        seen += grapheme.chars().count();
        if position < seen {
            return column;
        }
        column += 1;
    }
    // Past the end, keep the distance from the last cluster
    column + (position - seen)
}

/// Renders the three line diagnostic, without a trailing newline.
pub fn caret_diagnostic(message: &str, source: &[char], position: usize, caps: &Capabilities) -> String {
    let column = caret_column(source, position, caps.merges_combining);
    let source: String = source.iter().collect();
    format!(
        "{}\n{}\n{}{}",
        paint(message, Fmt::fg(Col::Red).bold(), caps.color),
        source,
        " ".repeat(column),
        paint("^", Fmt::fg(Col::Green), caps.color),
    )
}

// Tests ///////////////////////////////////////////////////////////////////////
