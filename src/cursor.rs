//! Forward-only cursor over the lines of a document.
//!
//! The document is split once into borrowed line slices; the cursor is a
//! plain index into that read-only sequence and never moves backwards.

use memchr::memchr_iter;

/// Split input on `\n` without normalizing anything else.
///
/// Matches `str::split('\n')`: a trailing newline yields a final empty
/// line, and the empty input yields one empty line.
pub fn split_lines(input: &str) -> Vec<&str> {
    let mut lines = Vec::with_capacity(input.len() / 32 + 1);
    let mut start = 0;
    for nl in memchr_iter(b'\n', input.as_bytes()) {
        lines.push(&input[start..nl]);
        start = nl + 1;
    }
    lines.push(&input[start..]);
    lines
}

/// A cursor over document lines.
///
/// # Example
/// ```
/// use linemark::cursor::LineCursor;
///
/// let mut cursor = LineCursor::new("one\ntwo\nthree");
/// assert_eq!(cursor.peek(), Some("one"));
/// cursor.bump();
/// assert_eq!(cursor.peek_ahead(1), Some("three"));
/// ```
#[derive(Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor positioned at the first line.
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: split_lines(input),
            pos: 0,
        }
    }

    /// Index of the current line.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total number of lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.lines.len() - self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Current line without advancing.
    #[inline]
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Line `n` positions ahead of the current one.
    #[inline]
    pub fn peek_ahead(&self, n: usize) -> Option<&'a str> {
        self.lines.get(self.pos + n).copied()
    }

    /// Advance by one line.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(!self.is_eof());
        self.pos += 1;
    }

    /// Advance by `n` lines.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos += n;
    }

    /// Consume and return the current line.
    #[inline]
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Count consecutive lines from the current one satisfying `predicate`,
    /// without advancing.
    pub fn count_while<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&'a str) -> bool,
    {
        self.lines[self.pos..]
            .iter()
            .take_while(|line| predicate(**line))
            .count()
    }

    /// Lines in `[start, end)`.
    #[inline]
    pub fn lines(&self, start: usize, end: usize) -> &[&'a str] {
        &self.lines[start..end]
    }
}

impl std::fmt::Debug for LineCursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineCursor")
            .field("position", &self.pos)
            .field("remaining", &self.remaining())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_matches_std() {
        for input in ["", "a", "a\n", "a\nb", "\n\n", "x\r\ny"] {
            let expected: Vec<&str> = input.split('\n').collect();
            assert_eq!(split_lines(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_cursor_empty() {
        let cursor = LineCursor::new("");
        assert_eq!(cursor.len(), 1);
        assert_eq!(cursor.peek(), Some(""));
    }

    #[test]
    fn test_cursor_bump_and_eof() {
        let mut cursor = LineCursor::new("a\nb");
        assert_eq!(cursor.next_line(), Some("a"));
        assert_eq!(cursor.position(), 1);
        cursor.bump();
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn test_cursor_peek_ahead() {
        let cursor = LineCursor::new("a\nb\nc");
        assert_eq!(cursor.peek_ahead(0), Some("a"));
        assert_eq!(cursor.peek_ahead(2), Some("c"));
        assert_eq!(cursor.peek_ahead(3), None);
    }

    #[test]
    fn test_cursor_count_while() {
        let mut cursor = LineCursor::new("- a\n- b\nc\n- d");
        assert_eq!(cursor.count_while(|l| l.starts_with("- ")), 2);
        cursor.advance(2);
        assert_eq!(cursor.count_while(|l| l.starts_with("- ")), 0);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_cursor_lines() {
        let cursor = LineCursor::new("a\nb\nc");
        assert_eq!(cursor.lines(1, 3), &["b", "c"]);
    }
}
