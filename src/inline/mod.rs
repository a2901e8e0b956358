//! Inline parser for block text.
//!
//! Two passes over one logical line:
//! 1. Code span splitting on backtick pairs
//! 2. Emphasis detection inside each plain piece (best effort)

mod code_span;
pub mod emphasis;
mod span;

pub use code_span::{split_code_spans, Segment};
pub use emphasis::{Emphasis, Styled};
pub use span::{InlineRun, InlineSpan};

/// Split block text into inline spans.
///
/// Text outside backtick pairs becomes `Plain`, text strictly between a
/// pair becomes `Code` (an empty pair gives an empty `Code`). Empty input
/// gives an empty run. Never fails.
///
/// # Example
/// ```
/// use linemark::{parse_inline, InlineSpan};
///
/// let run = parse_inline("run `cargo test` now");
/// assert_eq!(run.len(), 3);
/// assert_eq!(run.spans()[1], InlineSpan::Code("cargo test".into()));
/// ```
pub fn parse_inline(text: &str) -> InlineRun {
    let spans = split_code_spans(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(t) => InlineSpan::Plain {
                text: t.to_owned(),
                has_emphasis: emphasis::has_emphasis(t),
            },
            Segment::Code(code) => InlineSpan::Code(code.to_owned()),
        })
        .collect();

    InlineRun::new(spans)
}
