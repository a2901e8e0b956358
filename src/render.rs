//! Reference HTML renderer for the block tree.
//!
//! Every block variant is matched exhaustively, so a new variant cannot be
//! added without deciding how it renders.

use crate::block::{Alignment, Block, OrderedItem, Table};
use crate::inline::{Emphasis, InlineRun, InlineSpan};

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use linemark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(1000);
/// writer.write_str("<p>");
/// writer.write_escaped_text("Hello <World>");
/// writer.write_str("</p>");
///
/// assert_eq!(writer.into_string(), "<p>Hello &lt;World&gt;</p>");
/// ```
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Typical HTML is ~1.25x input size.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write a static string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.push_str(s);
    }

    /// Write a dynamic string without escaping.
    #[inline]
    pub fn write_string(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write text with HTML escaping (for text content).
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        html_escape::encode_text_to_string(text, &mut self.out);
    }

    /// Write a double-quoted attribute value with escaping.
    #[inline]
    pub fn write_escaped_attr(&mut self, attr: &str) {
        html_escape::encode_double_quoted_attribute_to_string(attr, &mut self.out);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Current length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    // --- Common HTML Elements ---

    /// Write heading start: `<hN>`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.out.push_str("<h");
        self.out.push(char::from(b'0' + level));
        self.out.push('>');
    }

    /// Write heading end: `</hN>\n`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.out.push_str("</h");
        self.out.push(char::from(b'0' + level));
        self.out.push_str(">\n");
    }

    /// Write code block start with optional language class.
    pub fn code_block_start(&mut self, language: Option<&str>, terminal: bool) {
        if terminal {
            self.write_str("<pre class=\"terminal\">");
        } else {
            self.write_str("<pre>");
        }
        match language {
            Some(lang) => {
                self.write_str("<code class=\"language-");
                self.write_escaped_attr(lang);
                self.write_str("\">");
            }
            None => self.write_str("<code>"),
        }
    }

    /// Write code block end: `</code></pre>\n`
    #[inline]
    pub fn code_block_end(&mut self) {
        self.write_str("</code></pre>\n");
    }

    /// Write list start (ordered): `<ol>\n` or `<ol start="N">\n`
    pub fn ol_start(&mut self, start: Option<u64>) {
        match start {
            Some(n) if n != 1 => {
                self.write_str("<ol start=\"");
                self.write_string(&n.to_string());
                self.write_str("\">\n");
            }
            _ => self.write_str("<ol>\n"),
        }
    }

    /// Write a table cell start with optional alignment.
    pub fn cell_start(&mut self, tag: &'static str, alignment: Alignment) {
        self.out.push('<');
        self.write_str(tag);
        if alignment != Alignment::Left {
            self.write_str(" align=\"");
            self.write_str(alignment.as_str());
            self.out.push('"');
        }
        self.out.push('>');
    }

    /// Write inline code: `<code>escaped_content</code>`
    #[inline]
    pub fn inline_code(&mut self, content: &str) {
        self.write_str("<code>");
        self.write_escaped_text(content);
        self.write_str("</code>");
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a block list into `writer`.
pub fn render_blocks(blocks: &[Block], writer: &mut HtmlWriter) {
    for block in blocks {
        render_block(block, writer);
    }
}

/// Render a single block.
pub fn render_block(block: &Block, writer: &mut HtmlWriter) {
    match block {
        Block::Heading { level, content } => {
            writer.heading_start(*level);
            render_inline(content, writer);
            writer.heading_end(*level);
        }
        Block::HorizontalRule => writer.write_str("<hr />\n"),
        Block::CodeBlock {
            code,
            language,
            is_terminal,
            ..
        } => {
            writer.code_block_start(language.as_deref(), *is_terminal);
            if !code.is_empty() {
                writer.write_escaped_text(code);
                writer.newline();
            }
            writer.code_block_end();
        }
        Block::BlockQuote { content } => {
            writer.write_str("<blockquote>\n<p>");
            render_inline(content, writer);
            writer.write_str("</p>\n</blockquote>\n");
        }
        Block::BulletList { items } => {
            writer.write_str("<ul>\n");
            for item in items {
                writer.write_str("<li>");
                render_inline(item, writer);
                writer.write_str("</li>\n");
            }
            writer.write_str("</ul>\n");
        }
        Block::OrderedList { items } => render_ordered_list(items, writer),
        Block::Table(table) => render_table(table, writer),
        Block::AsciiArt { content } => {
            writer.write_str("<pre class=\"ascii-art\">");
            writer.write_escaped_text(content);
            writer.write_str("</pre>\n");
        }
        Block::Paragraph { content } => {
            writer.write_str("<p>");
            render_inline(content, writer);
            writer.write_str("</p>\n");
        }
    }
}

fn render_ordered_list(items: &[OrderedItem], writer: &mut HtmlWriter) {
    writer.ol_start(items.first().and_then(OrderedItem::number));
    for item in items {
        writer.write_str("<li>");
        render_inline(&item.content, writer);
        writer.write_str("</li>\n");
    }
    writer.write_str("</ol>\n");
}

/// Rows shorter than the header get empty cells; cells past the last
/// column are not rendered.
fn render_table(table: &Table, writer: &mut HtmlWriter) {
    writer.write_str("<table>\n<thead>\n<tr>\n");
    for (column, &alignment) in table.alignments.iter().enumerate() {
        writer.cell_start("th", alignment);
        render_inline(&table.header_inline(column), writer);
        writer.write_str("</th>\n");
    }
    writer.write_str("</tr>\n</thead>\n");

    if !table.rows.is_empty() {
        writer.write_str("<tbody>\n");
        for row in 0..table.rows.len() {
            writer.write_str("<tr>\n");
            for (column, &alignment) in table.alignments.iter().enumerate() {
                writer.cell_start("td", alignment);
                render_inline(&table.cell_inline(row, column), writer);
                writer.write_str("</td>\n");
            }
            writer.write_str("</tr>\n");
        }
        writer.write_str("</tbody>\n");
    }
    writer.write_str("</table>\n");
}

/// Render inline spans, applying emphasis to plain spans that have it.
pub fn render_inline(run: &InlineRun, writer: &mut HtmlWriter) {
    for span in run {
        match span {
            InlineSpan::Code(code) => writer.inline_code(code),
            InlineSpan::Plain {
                text,
                has_emphasis: false,
            } => writer.write_escaped_text(text),
            InlineSpan::Plain { .. } => {
                for segment in span.emphasis_segments() {
                    match segment.emphasis {
                        Emphasis::None => writer.write_escaped_text(segment.text),
                        Emphasis::Italic => {
                            writer.write_str("<em>");
                            writer.write_escaped_text(segment.text);
                            writer.write_str("</em>");
                        }
                        Emphasis::Bold => {
                            writer.write_str("<strong>");
                            writer.write_escaped_text(segment.text);
                            writer.write_str("</strong>");
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::parse_inline;

    #[test]
    fn test_writer_new() {
        let writer = HtmlWriter::new();
        assert!(writer.is_empty());
    }

    #[test]
    fn test_writer_escaped_text() {
        let mut writer = HtmlWriter::new();
        writer.write_escaped_text("a < b & c");
        assert_eq!(writer.as_str(), "a &lt; b &amp; c");
    }

    #[test]
    fn test_writer_heading() {
        let mut writer = HtmlWriter::new();
        writer.heading_start(3);
        writer.write_str("x");
        writer.heading_end(3);
        assert_eq!(writer.as_str(), "<h3>x</h3>\n");
    }

    #[test]
    fn test_writer_code_block_language() {
        let mut writer = HtmlWriter::new();
        writer.code_block_start(Some("rust"), false);
        writer.code_block_end();
        assert_eq!(
            writer.as_str(),
            "<pre><code class=\"language-rust\"></code></pre>\n"
        );
    }

    #[test]
    fn test_writer_code_block_terminal() {
        let mut writer = HtmlWriter::new();
        writer.code_block_start(None, true);
        assert_eq!(writer.as_str(), "<pre class=\"terminal\"><code>");
    }

    #[test]
    fn test_writer_ol_with_start() {
        let mut writer = HtmlWriter::new();
        writer.ol_start(Some(5));
        assert_eq!(writer.as_str(), "<ol start=\"5\">\n");
    }

    #[test]
    fn test_writer_ol_default_start() {
        let mut writer = HtmlWriter::new();
        writer.ol_start(Some(1));
        writer.ol_start(None);
        assert_eq!(writer.as_str(), "<ol>\n<ol>\n");
    }

    #[test]
    fn test_writer_cell_alignment() {
        let mut writer = HtmlWriter::new();
        writer.cell_start("td", Alignment::Left);
        writer.cell_start("th", Alignment::Center);
        assert_eq!(writer.as_str(), "<td><th align=\"center\">");
    }

    #[test]
    fn test_writer_clear_reuse() {
        let mut writer = HtmlWriter::new();
        writer.write_str("first");
        writer.clear();
        writer.write_str("second");
        assert_eq!(writer.into_string(), "second");
    }

    #[test]
    fn test_render_inline_emphasis() {
        let mut writer = HtmlWriter::new();
        render_inline(&parse_inline("**b** *i* `c`"), &mut writer);
        assert_eq!(
            writer.as_str(),
            "<strong>b</strong> <em>i</em> <code>c</code>"
        );
    }

    #[test]
    fn test_render_inline_unbalanced_literal() {
        let mut writer = HtmlWriter::new();
        render_inline(&parse_inline("**open"), &mut writer);
        assert_eq!(writer.as_str(), "**open");
    }

    #[test]
    fn test_render_table_skips_extra_cells() {
        let table = Table {
            headers: vec!["a".into()],
            rows: vec![vec!["1".into(), "2".into()]],
            alignments: vec![Alignment::Left],
        };
        let mut writer = HtmlWriter::new();
        render_block(&Block::Table(table), &mut writer);
        assert_eq!(
            writer.as_str(),
            "<table>\n<thead>\n<tr>\n<th>a</th>\n</tr>\n</thead>\n\
             <tbody>\n<tr>\n<td>1</td>\n</tr>\n</tbody>\n</table>\n"
        );
    }

    #[test]
    fn test_render_table_pads_short_rows() {
        let table = Table {
            headers: vec!["a".into(), "b".into()],
            rows: vec![vec!["1".into()]],
            alignments: vec![Alignment::Left, Alignment::Right],
        };
        let mut writer = HtmlWriter::new();
        render_block(&Block::Table(table), &mut writer);
        assert_eq!(
            writer.as_str(),
            "<table>\n<thead>\n<tr>\n<th>a</th>\n<th align=\"right\">b</th>\n</tr>\n</thead>\n\
             <tbody>\n<tr>\n<td>1</td>\n<td align=\"right\"></td>\n</tr>\n</tbody>\n</table>\n"
        );
    }
}
