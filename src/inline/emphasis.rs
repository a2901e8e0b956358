//! Best-effort bold / italic resolution inside a single plain span.
//!
//! Only one level is recognized: `**bold**` and `*italic*`. There is no
//! nesting and no error path; markers that do not pair up stay in the
//! output as literal text.

use memchr::memchr;
use smallvec::SmallVec;

/// Emphasis applied to a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    None,
    Italic,
    Bold,
}

/// A slice of span text with the emphasis it should be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styled<'a> {
    pub text: &'a str,
    pub emphasis: Emphasis,
}

impl<'a> Styled<'a> {
    #[inline]
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            emphasis: Emphasis::None,
        }
    }

    #[inline]
    fn new(text: &'a str, emphasis: Emphasis) -> Self {
        Self { text, emphasis }
    }
}

/// Split `text` into styled segments.
///
/// An opener must not be followed by whitespace and a closer must not be
/// preceded by whitespace, so `2 * 3 * 4` stays literal.
pub fn resolve_emphasis(text: &str) -> SmallVec<[Styled<'_>; 4]> {
    let bytes = text.as_bytes();
    let mut out = SmallVec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(b'*', &bytes[pos..]) {
        let open = pos + offset;
        let strong = bytes.get(open + 1) == Some(&b'*');
        let delim = if strong { 2 } else { 1 };
        let content_start = open + delim;

        let close = if opens_at(bytes, content_start) {
            if strong {
                find_strong_closer(bytes, content_start)
            } else {
                find_italic_closer(bytes, content_start)
            }
        } else {
            None
        };

        match close {
            Some(close) => {
                if open > literal_start {
                    out.push(Styled::plain(&text[literal_start..open]));
                }
                let emphasis = if strong {
                    Emphasis::Bold
                } else {
                    Emphasis::Italic
                };
                out.push(Styled::new(&text[content_start..close], emphasis));
                pos = close + delim;
                literal_start = pos;
            }
            None => pos = content_start,
        }

        if pos >= bytes.len() {
            break;
        }
    }

    if literal_start < text.len() {
        out.push(Styled::plain(&text[literal_start..]));
    }
    out
}

/// Whether `text` contains at least one balanced emphasis pair.
pub fn has_emphasis(text: &str) -> bool {
    memchr(b'*', text.as_bytes()).is_some()
        && resolve_emphasis(text)
            .iter()
            .any(|segment| segment.emphasis != Emphasis::None)
}

#[inline]
fn opens_at(bytes: &[u8], content_start: usize) -> bool {
    bytes
        .get(content_start)
        .is_some_and(|b| !b.is_ascii_whitespace())
}

#[inline]
fn closes_after(bytes: &[u8], close: usize) -> bool {
    !bytes[close - 1].is_ascii_whitespace()
}

/// Position of the `**` closing a bold run whose content starts at `from`.
fn find_strong_closer(bytes: &[u8], from: usize) -> Option<usize> {
    let mut pos = from + 1;
    while pos < bytes.len() {
        let star = pos + memchr(b'*', &bytes[pos..])?;
        if bytes.get(star + 1) == Some(&b'*') && closes_after(bytes, star) {
            return Some(star);
        }
        pos = star + 1;
    }
    None
}

/// Position of the lone `*` closing an italic run whose content starts at `from`.
fn find_italic_closer(bytes: &[u8], from: usize) -> Option<usize> {
    let mut pos = from + 1;
    while pos < bytes.len() {
        let star = pos + memchr(b'*', &bytes[pos..])?;
        let doubled = bytes.get(star + 1) == Some(&b'*') || bytes[star - 1] == b'*';
        if !doubled && closes_after(bytes, star) {
            return Some(star);
        }
        pos = star + 1;
    }
    None
}
