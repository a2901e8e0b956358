//! Code fence opening lines.

/// Fence tags rendered as terminal sessions.
pub const TERMINAL_LANGUAGES: &[&str] = &["bash", "sh", "shell", "zsh", "terminal", "console"];

/// Parsed opening fence line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    /// Leading spaces before the backticks.
    pub indent: usize,
    /// Lower-cased tag after the backticks, if any.
    pub language: Option<String>,
}

impl FenceOpen {
    /// Parse an opening fence line. The caller has already checked
    /// [`is_fence`](super::classify::is_fence).
    pub fn parse(line: &str) -> Self {
        let indent = line.len() - line.trim_start_matches(' ').len();
        let tag = line.trim().trim_start_matches('`').trim();
        let language = (!tag.is_empty()).then(|| tag.to_lowercase());
        Self { indent, language }
    }

    pub fn is_terminal(&self) -> bool {
        self.language
            .as_deref()
            .is_some_and(|lang| TERMINAL_LANGUAGES.contains(&lang))
    }

    /// Remove the fence indentation from a content line.
    ///
    /// The prefix is removed only if it is made of spaces; any other line
    /// (shorter, tab-indented, or text in the prefix) is kept as is.
    pub fn strip_indent<'a>(&self, line: &'a str) -> &'a str {
        match line.get(..self.indent) {
            Some(prefix) if prefix.bytes().all(|b| b == b' ') => &line[self.indent..],
            _ => line,
        }
    }
}
