//! Block tree node types.

use crate::inline::{parse_inline, InlineRun};
use crate::range::LineRange;

/// Column alignment for table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Left-aligned (`---` or `:---`).
    #[default]
    Left,
    /// Right-aligned (`---:`).
    Right,
    /// Center-aligned (`:---:`).
    Center,
}

impl Alignment {
    /// Value for a CSS `text-align` / HTML `align` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

/// Item of a numbered list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderedItem {
    /// Marker text as written, including the trailing `". "`.
    pub label: String,
    pub content: InlineRun,
}

impl OrderedItem {
    /// Numeric value of the label, if it fits in a `u64`.
    pub fn number(&self) -> Option<u64> {
        self.label.trim_end_matches(". ").parse().ok()
    }
}

/// A pipe table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub headers: Vec<String>,
    /// Data rows as written; a row may hold fewer or more cells than
    /// there are columns.
    pub rows: Vec<Vec<String>>,
    /// One entry per column.
    pub alignments: Vec<Alignment>,
}

impl Table {
    /// Declared column count.
    pub fn column_count(&self) -> usize {
        self.alignments.len()
    }

    /// Cell text, or `""` for a cell the row does not have.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    /// Header cell text, or `""` past the end.
    pub fn header(&self, column: usize) -> &str {
        self.headers.get(column).map_or("", String::as_str)
    }

    /// Inline spans of a header cell.
    pub fn header_inline(&self, column: usize) -> InlineRun {
        parse_inline(self.header(column))
    }

    /// Inline spans of a data cell.
    pub fn cell_inline(&self, row: usize, column: usize) -> InlineRun {
        parse_inline(self.cell(row, column))
    }
}

/// A top-level structural unit of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Block {
    /// `#` through `####` heading.
    Heading { level: u8, content: InlineRun },
    /// `---`, `***` or `___`.
    HorizontalRule,
    /// Fenced code, fence lines excluded.
    CodeBlock {
        code: String,
        /// Lower-cased fence tag.
        language: Option<String>,
        /// Shell-like tag (`bash`, `console`, ...).
        is_terminal: bool,
        /// Leading spaces of the opening fence.
        indent: usize,
    },
    /// Consecutive `> ` lines joined into one paragraph.
    BlockQuote { content: InlineRun },
    BulletList { items: Vec<InlineRun> },
    OrderedList { items: Vec<OrderedItem> },
    Table(Table),
    /// Box-drawing region, verbatim.
    AsciiArt { content: String },
    Paragraph { content: InlineRun },
}

impl Block {
    /// Short lowercase name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::HorizontalRule => "horizontal_rule",
            Self::CodeBlock { .. } => "code_block",
            Self::BlockQuote { .. } => "block_quote",
            Self::BulletList { .. } => "bullet_list",
            Self::OrderedList { .. } => "ordered_list",
            Self::Table(_) => "table",
            Self::AsciiArt { .. } => "ascii_art",
            Self::Paragraph { .. } => "paragraph",
        }
    }
}

/// A block together with the input lines it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpannedBlock {
    pub lines: LineRange,
    pub block: Block,
}
