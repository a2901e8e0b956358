//! Box-drawing region extent.

use super::classify;

/// Whether `line` extends an ASCII-art region that is already open.
///
/// Lines with box-drawing glyphs always extend it. Other lines extend it
/// unless they are blank or open a heading, fence, quote, bullet or
/// numbered item.
pub fn continues_region(line: &str) -> bool {
    if classify::has_box_drawing(line) {
        return true;
    }
    !(classify::is_blank(line)
        || classify::heading(line).is_some()
        || classify::is_fence(line)
        || classify::quote_body(line).is_some()
        || classify::bullet_body(line).is_some()
        || classify::numbered_item(line).is_some())
}
