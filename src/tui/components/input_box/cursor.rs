//! Cursor position and horizontal scrolling for the single-line InputBox.
//!
//! The cursor is a byte offset that always sits on a char boundary. The
//! buffer itself is owned by `InputBox` and passed in explicitly.

use unicode_width::UnicodeWidthChar;

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Returns `(start, column)`: the byte offset where the visible window begins
/// so that the cursor at `pos` fits in `width` cells, and the cursor's column
/// within that window.
///
/// The window keeps one spare cell so the cursor can sit after the last char.
pub(super) fn visible_window(text: &str, pos: usize, width: u16) -> (usize, u16) {
    let budget = usize::from(width.saturating_sub(1));
    let mut start = pos;
    let mut column = 0usize;

    for (i, c) in text[..pos].char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if column + w > budget {
            break;
        }
        column += w;
        start = i;
    }

    (start, column as u16)
}
