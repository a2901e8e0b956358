//! Structural limits.
//!
//! These bound what the parser will recognize so that adversarial input
//! degrades to plain text instead of producing huge structures.

/// Deepest heading level (`####`). Five or more `#` is paragraph text.
pub const MAX_HEADING_LEVEL: usize = 4;

/// Backticks needed to open or close a code fence.
pub const MIN_FENCE_BACKTICKS: usize = 3;

/// Maximum table columns; extra header cells are ignored.
pub const MAX_TABLE_COLUMNS: usize = 128;
