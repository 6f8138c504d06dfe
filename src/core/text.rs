//! Display-safe text.
//!
//! Message text comes from the user and from the server, and both end up
//! written into the terminal. Control characters (ESC in particular) would be
//! interpreted by the terminal, so they are replaced with their visible
//! escape form before anything is drawn. Newlines and tabs are kept.

use std::borrow::Cow;

/// Returns `text` with every control or bidi-override character replaced by
/// its escaped form (`\u{1b}`, `\r`, ...). Borrows when nothing needs escaping.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if needs_escape(c) {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
    match c {
        '\n' | '\t' => false,
        // Bidi embeddings/overrides and isolates can visually reorder text.
        '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}' => true,
        _ => c.is_control(),
    }
}
