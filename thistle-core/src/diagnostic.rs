//! Rendering of diagnostics against the original source text.
//!
//! Diagnostics from every stage (lexer, parser, validator) implement
//! [`SourceDiagnostic`] and are rendered the same way: the source line
//! containing the offending range, a caret underline, and the message.

use core::fmt;

use crate::span::Range;

/// A diagnostic that can be rendered against the source it came from.
///
/// `Display` provides the human-readable message; `range` points at
/// the offending region when one is known.
pub trait SourceDiagnostic: fmt::Display {
    fn range(&self) -> Option<Range>;
}

/// Render one diagnostic: caret-underlined excerpt (when a range is
/// known) followed by the message.
pub fn render(src: &str, diag: &dyn SourceDiagnostic) -> String {
    match diag.range() {
        Some(range) => format!("{}\n{}", highlighted_line(src, range), diag),
        None => diag.to_string(),
    }
}

/// The full source line containing `range`, with a `^` underline
/// beneath the range itself.
pub fn highlighted_line(src: &str, range: Range) -> String {
    let lo = range.lo.min(src.len());
    let hi = range.hi.clamp(lo, src.len());

    let line_start = src[..lo].rfind('\n').map_or(0, |i| i + 1);
    let line_end = src[hi..].find('\n').map_or(src.len(), |i| hi + i);
    let line = &src[line_start..line_end];

    // Indent and width are in characters, not bytes, so multibyte
    // text earlier on the line keeps the underline aligned.
    let indent = src[line_start..lo].chars().count();
    let carets = src[lo..hi.min(line_end)].chars().count().max(1);
    format!("{line}\n{}{}", " ".repeat(indent), "^".repeat(carets))
}
