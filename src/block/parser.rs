//! Block parser implementation.

use crate::cursor::LineCursor;
use crate::inline::parse_inline;
use crate::range::LineRange;
use crate::Options;

use super::art;
use super::classify;
use super::fence::FenceOpen;
use super::node::{Block, OrderedItem, SpannedBlock};
use super::table::{self, TableRegion};

/// Block parser state.
///
/// Each step looks at the line under the cursor, decides exactly one block
/// and moves the cursor past every line that block consumed. Constructs are
/// tried in a fixed order and the first match wins: fence, heading, rule,
/// quote, bullet list, numbered list, table, ASCII art, paragraph.
pub struct BlockParser<'a> {
    /// Document lines and current position.
    cursor: LineCursor<'a>,
    options: Options,
    /// Blocks built so far, in document order.
    blocks: Vec<SpannedBlock>,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser with default options.
    pub fn new(input: &'a str) -> Self {
        Self::new_with_options(input, Options::default())
    }

    /// Create a new block parser with options.
    pub fn new_with_options(input: &'a str, options: Options) -> Self {
        Self {
            cursor: LineCursor::new(input),
            options,
            blocks: Vec::new(),
        }
    }

    /// Parse the whole document.
    pub fn parse(self) -> Vec<Block> {
        self.parse_spanned()
            .into_iter()
            .map(|spanned| spanned.block)
            .collect()
    }

    /// Parse the whole document, keeping the line range of every block.
    pub fn parse_spanned(mut self) -> Vec<SpannedBlock> {
        while let Some(line) = self.cursor.peek() {
            self.parse_block(line);
        }
        self.blocks
    }

    /// Classify the line under the cursor and consume one block.
    fn parse_block(&mut self, line: &'a str) {
        if classify::is_blank(line) {
            self.cursor.bump();
            return;
        }

        if self.try_code_fence(line) {
            return;
        }

        if self.try_heading(line) {
            return;
        }

        if self.try_rule(line) {
            return;
        }

        if self.try_block_quote(line) {
            return;
        }

        if self.try_bullet_list(line) {
            return;
        }

        if self.try_numbered_list(line) {
            return;
        }

        if self.try_table() {
            return;
        }

        if self.try_ascii_art(line) {
            return;
        }

        self.parse_paragraph(line);
    }

    /// Record a block covering the lines from `start` to the cursor.
    fn push(&mut self, start: usize, block: Block) {
        let lines = LineRange::from_usize(start, self.cursor.position());
        log::trace!("{} on lines {}..{}", block.kind(), lines.start, lines.end);
        self.blocks.push(SpannedBlock { lines, block });
    }

    /// Try to parse a fenced code block.
    /// Returns true if successful.
    fn try_code_fence(&mut self, line: &str) -> bool {
        if !classify::is_fence(line) {
            return false;
        }

        let start = self.cursor.position();
        let fence = FenceOpen::parse(line);
        self.cursor.bump();

        let mut code_lines = Vec::new();
        let mut closed = false;
        while let Some(next) = self.cursor.next_line() {
            if classify::is_fence(next) {
                closed = true;
                break;
            }
            code_lines.push(fence.strip_indent(next));
        }

        if !closed {
            log::debug!(
                "code fence opened on line {} has no closing fence; closing at end of input",
                start + 1
            );
        }

        let is_terminal = fence.is_terminal();
        self.push(
            start,
            Block::CodeBlock {
                code: code_lines.join("\n"),
                language: fence.language,
                is_terminal,
                indent: fence.indent,
            },
        );
        true
    }

    /// Try to parse a `#` to `####` heading.
    fn try_heading(&mut self, line: &str) -> bool {
        let Some((level, text)) = classify::heading(line) else {
            return false;
        };

        let start = self.cursor.position();
        self.cursor.bump();
        self.push(
            start,
            Block::Heading {
                level,
                content: parse_inline(text),
            },
        );
        true
    }

    fn try_rule(&mut self, line: &str) -> bool {
        if !classify::is_rule(line) {
            return false;
        }

        let start = self.cursor.position();
        self.cursor.bump();
        self.push(start, Block::HorizontalRule);
        true
    }

    /// Try to parse consecutive `> ` lines as one quote.
    fn try_block_quote(&mut self, line: &str) -> bool {
        if classify::quote_body(line).is_none() {
            return false;
        }

        let start = self.cursor.position();
        let mut parts = Vec::new();
        while let Some(body) = self.cursor.peek().and_then(classify::quote_body) {
            parts.push(body);
            self.cursor.bump();
        }

        self.push(
            start,
            Block::BlockQuote {
                content: parse_inline(&parts.join(" ")),
            },
        );
        true
    }

    fn try_bullet_list(&mut self, line: &str) -> bool {
        if classify::bullet_body(line).is_none() {
            return false;
        }

        let start = self.cursor.position();
        let mut items = Vec::new();
        while let Some(body) = self.cursor.peek().and_then(classify::bullet_body) {
            items.push(parse_inline(body));
            self.cursor.bump();
        }

        self.push(start, Block::BulletList { items });
        true
    }

    fn try_numbered_list(&mut self, line: &str) -> bool {
        if classify::numbered_item(line).is_none() {
            return false;
        }

        let start = self.cursor.position();
        let mut items = Vec::new();
        while let Some((label, body)) = self.cursor.peek().and_then(classify::numbered_item) {
            items.push(OrderedItem {
                label: label.to_owned(),
                content: parse_inline(body),
            });
            self.cursor.bump();
        }

        self.push(start, Block::OrderedList { items });
        true
    }

    /// Try to parse a run of table-like lines.
    ///
    /// Once a run of two or more lines is found it is always consumed: as
    /// a table (with any lines above the header as paragraphs) or, when no
    /// header can be established, as one paragraph per line.
    fn try_table(&mut self) -> bool {
        if !self.options.tables {
            return false;
        }

        let region_len = self.cursor.count_while(classify::is_table_like);
        if region_len < 2 {
            return false;
        }

        let start = self.cursor.position();
        let region = self.cursor.lines(start, start + region_len).to_vec();

        match table::parse_region(&region) {
            TableRegion::Table { header, table } => {
                for line in &region[..header] {
                    self.push_line_paragraph(line);
                }
                let table_start = self.cursor.position();
                self.cursor.advance(region_len - header);
                self.push(table_start, Block::Table(table));
            }
            TableRegion::Rejected => {
                for line in &region {
                    self.push_line_paragraph(line);
                }
            }
        }
        true
    }

    /// Try to parse a box-drawing region. Content is kept verbatim.
    fn try_ascii_art(&mut self, line: &str) -> bool {
        if !self.options.ascii_art || !classify::has_box_drawing(line) {
            return false;
        }

        let start = self.cursor.position();
        self.cursor.bump();
        let extra = self.cursor.count_while(art::continues_region);
        self.cursor.advance(extra);

        let content = self.cursor.lines(start, self.cursor.position()).join("\n");
        self.push(start, Block::AsciiArt { content });
        true
    }

    /// Parse a paragraph starting at the current line.
    fn parse_paragraph(&mut self, line: &str) {
        let start = self.cursor.position();
        let mut parts = vec![line.trim()];
        self.cursor.bump();

        while let Some(next) = self.cursor.peek() {
            if classify::is_blank(next) || self.interrupts_paragraph(next) {
                break;
            }
            parts.push(next.trim());
            self.cursor.bump();
        }

        self.push(
            start,
            Block::Paragraph {
                content: parse_inline(&parts.join(" ")),
            },
        );
    }

    /// A single line as its own paragraph.
    fn push_line_paragraph(&mut self, line: &str) {
        let start = self.cursor.position();
        self.cursor.bump();
        self.push(
            start,
            Block::Paragraph {
                content: parse_inline(line.trim()),
            },
        );
    }

    /// Whether the line under the cursor opens a construct that ends a
    /// running paragraph.
    fn interrupts_paragraph(&self, line: &str) -> bool {
        classify::is_fence(line)
            || classify::heading(line).is_some()
            || classify::quote_body(line).is_some()
            || classify::bullet_body(line).is_some()
            || classify::numbered_item(line).is_some()
            || classify::is_rule(line)
            || self.opens_table()
    }

    fn opens_table(&self) -> bool {
        self.options.tables
            && self.cursor.peek().is_some_and(classify::is_table_like)
            && self.cursor.peek_ahead(1).is_some_and(classify::is_table_like)
    }
}
