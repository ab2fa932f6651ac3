//! Making catalog-supplied text safe to interpolate.
//!
//! Comments and descriptions come straight from the database and may contain
//! anything. Everything user supplied passes through one of these functions
//! before it reaches the output.

use pgts_ir::CUSTOM_TYPE_MARKER;

/// Stand-in for `/` so a description can never close its comment early.
const SLASH_SUBSTITUTE: char = '\u{2215}';

/// Prepare a catalog description for a doc comment.
///
/// The description is cut at the first `@custom ` marker, trimmed, and every
/// `/` is replaced by `∕`. Returns `None` when nothing is left.
///
/// Sanitizing an already sanitized string returns it unchanged.
pub fn sanitize_comment(description: Option<&str>) -> Option<String> {
    let text = description?;
    let text = match text.split_once(CUSTOM_TYPE_MARKER) {
        Some((before, _)) => before,
        None => text,
    };
    let text = text.trim().replace('/', &SLASH_SUBSTITUTE.to_string());
    (!text.is_empty()).then_some(text)
}

/// Prepare text for a single `//` line comment.
pub fn sanitize_line(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('/', &SLASH_SUBSTITUTE.to_string())
}

/// Escape text for a single-quoted string literal.
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
