//! Pure line classification predicates.
//!
//! Every check looks at a single line and allocates nothing. Fence, rule
//! and table checks look at trimmed content; heading, quote and list
//! markers must start the line.

use memchr::memchr;

use crate::limits::{MAX_HEADING_LEVEL, MIN_FENCE_BACKTICKS};

const FENCE: &str = "```";
const _: () = assert!(FENCE.len() == MIN_FENCE_BACKTICKS);

/// Whitespace-only line.
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Line opening or closing a code fence.
#[inline]
pub fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

/// `(level, text)` for an ATX heading of level 1 to 4.
pub fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL {
        return None;
    }
    if line.as_bytes().get(hashes) != Some(&b' ') {
        return None;
    }
    Some((hashes as u8, line[hashes + 1..].trim()))
}

/// Exactly `---`, `***` or `___` once trimmed.
#[inline]
pub fn is_rule(line: &str) -> bool {
    matches!(line.trim(), "---" | "***" | "___")
}

/// Text after a `"> "` quote prefix.
#[inline]
pub fn quote_body(line: &str) -> Option<&str> {
    line.strip_prefix("> ")
}

/// Text after a `"- "` or `"* "` bullet prefix.
#[inline]
pub fn bullet_body(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
}

/// `(label, text)` for a numbered item such as `12. text`.
///
/// Linear scan: one or more ASCII digits, a period, a single space. The
/// label keeps the period and the space.
pub fn numbered_item(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    if bytes.get(digits) != Some(&b'.') || bytes.get(digits + 1) != Some(&b' ') {
        return None;
    }
    Some(line.split_at(digits + 2))
}

/// Contains a `|` and is not a fence line.
#[inline]
pub fn is_table_like(line: &str) -> bool {
    let trimmed = line.trim();
    memchr(b'|', trimmed.as_bytes()).is_some() && !trimmed.starts_with(FENCE)
}

/// Box drawing, block elements, geometric shapes or arrows.
#[inline]
pub fn is_box_drawing_char(c: char) -> bool {
    matches!(
        c,
        '\u{2500}'..='\u{257F}'
            | '\u{2580}'..='\u{259F}'
            | '\u{25A0}'..='\u{25FF}'
            | '\u{2190}'..='\u{21FF}'
    )
}

/// Line contains at least one box-drawing code point.
#[inline]
pub fn has_box_drawing(line: &str) -> bool {
    !line.is_ascii() && line.chars().any(is_box_drawing_char)
}
