// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-offset spans and caret-style diagnostics for command lines.

use serde::{Deserialize, Serialize};

/// A range of bytes in the input line.
///
/// `start` is inclusive and `end` is exclusive, so a one-character token at
/// offset 4 has the span `4..5`.
///
/// # Examples
///
/// ```
/// use cmdl_syntax::Span;
///
/// let line = "add 1 2";
/// assert_eq!(Span::new(4, 5).slice(line), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// A zero-width span at `pos`, used for end-of-input errors.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `start <= pos < end`.
    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The spanned text, or `""` when the span is out of bounds or splits a
    /// UTF-8 character.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Render the input around `span` with a line of carets underneath.
///
/// At most `context_chars` characters are kept on either side of the span
/// start. Zero-width spans (end of input) still get a single caret.
///
/// ```text
/// say "unterminated
///     ^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    let anchor = floor_char_boundary(input, span.start);

    let start = input[..anchor]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(anchor);

    let end = input[anchor..]
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map(|(i, c)| anchor + i + c.len_utf8())
        .unwrap_or(input.len());

    let snippet = &input[start..end];
    // Carets are counted in characters so multi-byte text lines up.
    let caret_pos = input[start..anchor].chars().count();
    let caret_len = span.slice(input).chars().count().max(1);

    format!(
        "{}\n{}{}",
        snippet,
        " ".repeat(caret_pos),
        "^".repeat(caret_len)
    )
}

/// Locate a span, returning `(line, column, line_content)`.
///
/// Lines are 1-indexed, columns 0-indexed and counted in characters. Command
/// lines are single-line in practice, but pasted input may not be.
pub fn locate_span(source: &str, span: Span) -> (usize, usize, &str) {
    let offset = floor_char_boundary(source, span.start);
    let line_start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_num = source[..line_start].matches('\n').count() + 1;
    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());
    let col = source[line_start..offset].chars().count();

    (line_num, col, &source[line_start..line_end])
}

/// Render a rustc-style diagnostic block.
///
/// ```text
/// error: unexpected token ',' at position 5, expected whitespace before argument
///   --> line 1, column 6
///    |
///  1 | add 1,2
///    |      ^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let (line_num, col, line_content) = locate_span(source, span);
    let span_len = span.slice(source).chars().count().max(1);

    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}{}",
        message,
        line_num,
        col + 1,
        line_num,
        line_content,
        " ".repeat(col),
        "^".repeat(span_len)
    )
}

fn floor_char_boundary(s: &str, pos: usize) -> usize {
    let mut pos = pos.min(s.len());
    while !s.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
