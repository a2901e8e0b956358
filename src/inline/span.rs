//! Inline span types.

use smallvec::SmallVec;

use super::emphasis::{resolve_emphasis, Styled};

/// One fragment of a block's text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InlineSpan {
    /// Text outside code spans.
    Plain {
        text: String,
        /// Whether the text holds at least one balanced `**bold**` or
        /// `*italic*` pair.
        has_emphasis: bool,
    },
    /// Text between a pair of backticks, backticks excluded.
    Code(String),
}

impl InlineSpan {
    /// Raw text of the span, with emphasis markers still in place.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text, .. } | Self::Code(text) => text,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code(_))
    }

    /// Split a plain span into emphasis segments.
    ///
    /// Code spans come back as a single unstyled segment.
    pub fn emphasis_segments(&self) -> SmallVec<[Styled<'_>; 4]> {
        match self {
            Self::Plain { text, .. } => resolve_emphasis(text),
            Self::Code(text) => smallvec::smallvec![Styled::plain(text)],
        }
    }
}

/// Ordered sequence of inline spans owned by a single block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InlineRun(Vec<InlineSpan>);

impl InlineRun {
    pub fn new(spans: Vec<InlineSpan>) -> Self {
        Self(spans)
    }

    pub fn spans(&self) -> &[InlineSpan] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InlineSpan> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_spans(self) -> Vec<InlineSpan> {
        self.0
    }

    /// Concatenated span text without backticks.
    pub fn to_plain_text(&self) -> String {
        self.0.iter().map(InlineSpan::text).collect()
    }
}

impl From<Vec<InlineSpan>> for InlineRun {
    fn from(spans: Vec<InlineSpan>) -> Self {
        Self(spans)
    }
}

impl<'a> IntoIterator for &'a InlineRun {
    type Item = &'a InlineSpan;
    type IntoIter = std::slice::Iter<'a, InlineSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for InlineRun {
    type Item = InlineSpan;
    type IntoIter = std::vec::IntoIter<InlineSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::emphasis::Emphasis;

    #[test]
    fn test_plain_text_concatenates() {
        let run = InlineRun::new(vec![
            InlineSpan::Plain {
                text: "run ".into(),
                has_emphasis: false,
            },
            InlineSpan::Code("cargo".into()),
        ]);
        assert_eq!(run.to_plain_text(), "run cargo");
        assert_eq!(run.len(), 2);
    }

    #[test]
    fn test_code_segments_are_unstyled() {
        let span = InlineSpan::Code("**x**".into());
        let segments = span.emphasis_segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "**x**");
        assert_eq!(segments[0].emphasis, Emphasis::None);
    }
}
