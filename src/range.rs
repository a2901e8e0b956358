//! Compact line ranges for mapping blocks back to source lines.
//!
//! Uses `u32` line indices; documents with more than four billion lines
//! are out of scope.

/// Half-open range of line indices `[start, end)` into the input document.
///
/// # Example
/// ```
/// use linemark::LineRange;
///
/// let range = LineRange::new(2, 5);
/// assert_eq!(range.len(), 3);
/// assert!(range.contains(4));
/// assert!(!range.contains(5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<LineRange>() == 8);

impl LineRange {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize line indices.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        debug_assert!(start <= end);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Range covering exactly one line.
    #[inline]
    pub fn single(line: usize) -> Self {
        Self::from_usize(line, line + 1)
    }

    /// Number of lines covered.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this range contains a line index.
    #[inline]
    pub const fn contains(&self, line: u32) -> bool {
        line >= self.start && line < self.end
    }

    /// Select the covered lines out of a line slice.
    #[inline]
    pub fn slice<'a, 'b>(&self, lines: &'b [&'a str]) -> &'b [&'a str] {
        &lines[self.start as usize..self.end as usize]
    }
}

impl From<std::ops::Range<usize>> for LineRange {
    #[inline]
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::from_usize(r.start, r.end)
    }
}

impl From<LineRange> for std::ops::Range<usize> {
    #[inline]
    fn from(r: LineRange) -> Self {
        r.start as usize..r.end as usize
    }
}
