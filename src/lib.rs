//! linemark: single-pass, line-oriented Markdown to block tree parser
//!
//! This crate turns a whole document into an ordered list of typed blocks
//! (headings, code fences, quotes, lists, tables, ASCII art, paragraphs),
//! each carrying inline spans ready for a renderer.
//!
//! # Design Principles
//! - Total: every input yields a block list; malformed constructs degrade
//!   to plain text instead of failing
//! - Forward-only: one cursor over the lines, no backtracking across blocks
//! - No regex: classification is a set of pure byte-level predicates
//! - Whole document per call: nothing is cached or shared between calls

pub mod block;
pub mod cursor;
pub mod inline;
pub mod limits;
pub mod range;
pub mod render;
pub mod session;

// Re-export primary types
pub use block::{Alignment, Block, BlockParser, OrderedItem, SpannedBlock, Table};
pub use inline::{parse_inline, Emphasis, InlineRun, InlineSpan, Styled};
pub use range::LineRange;
pub use render::HtmlWriter;
pub use session::{LiveDocument, ParseOutcome, ParseRequest, Revision};

/// Parsing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Recognize pipe tables. When off, table-like lines are paragraph text.
    pub tables: bool,
    /// Recognize box-drawing regions. When off, they are paragraph text.
    pub ascii_art: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tables: true,
            ascii_art: true,
        }
    }
}

/// Parse a document into blocks.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// use linemark::Block;
///
/// let blocks = linemark::parse("# Title\n\nBody text");
/// assert_eq!(blocks.len(), 2);
/// assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));
/// assert!(matches!(blocks[1], Block::Paragraph { .. }));
/// ```
pub fn parse(input: &str) -> Vec<Block> {
    BlockParser::new(input).parse()
}

/// Parse a document into blocks with options.
pub fn parse_with_options(input: &str, options: &Options) -> Vec<Block> {
    BlockParser::new_with_options(input, *options).parse()
}

/// Parse a document, keeping the input line range of every block.
pub fn parse_spanned(input: &str) -> Vec<SpannedBlock> {
    BlockParser::new(input).parse_spanned()
}

/// Convert Markdown to HTML with the reference renderer.
///
/// # Example
/// ```
/// let html = linemark::to_html("# Hello\n\nWorld");
/// assert!(html.contains("<h1>Hello</h1>"));
/// assert!(html.contains("<p>World</p>"));
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let blocks = parse_with_options(input, options);
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render::render_blocks(&blocks, &mut writer);
    writer.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(to_html("Hello, world!"), "<p>Hello, world!</p>\n");
    }

    #[test]
    fn test_paragraph_escaping() {
        assert_eq!(
            to_html("<script>alert('xss')</script>"),
            "<p>&lt;script&gt;alert('xss')&lt;/script&gt;</p>\n"
        );
    }

    #[test]
    fn test_heading_all_levels() {
        for level in 1..=4 {
            let input = format!("{} Heading", "#".repeat(level));
            let html = to_html(&input);
            assert!(
                html.contains(&format!("<h{level}>Heading</h{level}>")),
                "Failed for level {level}: {html}"
            );
        }
    }

    #[test]
    fn test_heading_level_five_is_text() {
        assert_eq!(to_html("##### Five"), "<p>##### Five</p>\n");
    }

    #[test]
    fn test_rule_variants() {
        assert_eq!(to_html("---"), "<hr />\n");
        assert_eq!(to_html("***"), "<hr />\n");
        assert_eq!(to_html("___"), "<hr />\n");
    }

    #[test]
    fn test_options_default() {
        let options = Options::default();
        assert!(options.tables);
        assert!(options.ascii_art);
    }

    #[test]
    fn test_parse_with_options_matches_parse() {
        let input = "# A\n\n| x | y |\n|---|---|\n| 1 | 2 |\n\n┌─┐";
        assert_eq!(parse(input), parse_with_options(input, &Options::default()));
    }

    #[test]
    fn test_parse_is_fresh_per_call() {
        let first = parse("- a\n- b");
        let second = parse("- a\n- b");
        assert_eq!(first, second);
    }
}
