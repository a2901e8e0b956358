//! Code span splitting.
//!
//! Code spans have highest precedence among inline elements: text is cut
//! on single backticks before emphasis is considered, so markers inside
//! a code span are never styled.

use memchr::memchr;
use smallvec::SmallVec;

/// A piece of inline text before span construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside backticks, or the literal tail after an unmatched one.
    Text(&'a str),
    /// Text between a matched pair of backticks.
    Code(&'a str),
}

/// Split `text` on backtick pairs.
///
/// Backticks pair left to right. An opening backtick with no closer is
/// kept, together with everything after it, as literal text.
pub fn split_code_spans(text: &str) -> SmallVec<[Segment<'_>; 8]> {
    let bytes = text.as_bytes();
    let mut segments = SmallVec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(open) = memchr(b'`', &bytes[pos..]).map(|o| pos + o) else {
            break;
        };
        let Some(close) = memchr(b'`', &bytes[open + 1..]).map(|o| open + 1 + o) else {
            break;
        };

        if open > pos {
            segments.push(Segment::Text(&text[pos..open]));
        }
        segments.push(Segment::Code(&text[open + 1..close]));
        pos = close + 1;
    }

    if pos < bytes.len() {
        segments.push(Segment::Text(&text[pos..]));
    }
    segments
}
