//! Block-level parser for Markdown.
//!
//! The block parser is line-oriented and handles:
//! - Fenced code blocks
//! - Headings (`#` to `####`)
//! - Horizontal rules
//! - Block quotes
//! - Bullet and numbered lists
//! - Pipe tables
//! - ASCII-art / box-drawing regions
//! - Paragraphs

mod art;
pub mod classify;
mod fence;
mod node;
mod parser;
pub mod table;

pub use fence::{FenceOpen, TERMINAL_LANGUAGES};
pub use node::{Alignment, Block, OrderedItem, SpannedBlock, Table};
pub use parser::BlockParser;
