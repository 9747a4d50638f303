//! Macron input: ASCII shorthand typed into a text field is rewritten into
//! long vowels while the cursor stays where the user was typing.
//!
//! `(a)` becomes `ā` (and `(A)` becomes `Ā`); a bare capital vowel `A`
//! becomes the lower-case `ā`. The whole buffer is rewritten on every edit, so
//! a shorthand typed one key at a time converts as soon as it is complete.
//!
//! Cursor positions count `char`s. A rewritten cursor never lands past the
//! end of the rewritten text.

use tracing::trace;

/// First pass: parenthesized vowels.
pub const PARENTHESIZED: [(&str, &str); 10] = [
    ("(a)", "ā"),
    ("(e)", "ē"),
    ("(i)", "ī"),
    ("(o)", "ō"),
    ("(u)", "ū"),
    ("(A)", "Ā"),
    ("(E)", "Ē"),
    ("(I)", "Ī"),
    ("(O)", "Ō"),
    ("(U)", "Ū"),
];

/// Second pass, over the output of the first: bare capitals.
pub const BARE_CAPITALS: [(&str, &str); 5] = [
    ("A", "ā"),
    ("E", "ē"),
    ("I", "ī"),
    ("O", "ō"),
    ("U", "ū"),
];

/// A change to a text field, as reported by the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditEvent {
    pub previous_text: String,
    pub new_text: String,
    /// Cursor in `new_text`, before any rewriting.
    pub cursor_before: usize,
}

/// The text and cursor to put back into the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edit {
    pub text: String,
    pub cursor: usize,
}

pub fn transform(event: &EditEvent) -> Edit {
    transform_str(&event.new_text, event.cursor_before)
}

pub fn transform_str(original: &str, cursor: usize) -> Edit {
    let text = rewrite(original);
    if text == original {
        return Edit { text, cursor };
    }

    let offset = cursor_offset(original, cursor);
    let new_cursor = cursor.saturating_sub(offset).min(text.chars().count());
    trace!(cursor, new_cursor, "rewrote macron shorthand");
    Edit {
        text,
        cursor: new_cursor,
    }
}

/// Replaces `[selection_start, selection_end)` with `ch` and puts the cursor
/// right after it. Out-of-range selections are clamped to the buffer.
pub fn insert_at_cursor(
    buffer: &str,
    selection_start: usize,
    selection_end: usize,
    ch: char,
) -> Edit {
    let len = buffer.chars().count();
    let start = selection_start.min(len);
    let end = selection_end.clamp(start, len);

    let mut text: String = buffer.chars().take(start).collect();
    text.push(ch);
    text.extend(buffer.chars().skip(end));
    Edit {
        text,
        cursor: start + 1,
    }
}

fn rules() -> impl Iterator<Item = (&'static str, &'static str)> {
    PARENTHESIZED.into_iter().chain(BARE_CAPITALS)
}

fn rewrite(text: &str) -> String {
    rules().fold(text.to_owned(), |text, (pattern, macron)| {
        text.replace(pattern, macron)
    })
}

// Replays every rule against the unrewritten text and sums how much each
// match ending at or before the cursor shrank the buffer.
// Every rule maps to something no longer than its pattern.
fn cursor_offset(original: &str, cursor: usize) -> usize {
    rules()
        .map(|(pattern, macron)| {
            let shrink = pattern.chars().count() - macron.chars().count();
            let matches_before_cursor = original
                .match_indices(pattern)
                .map(|(start, matched)| original[..start + matched.len()].chars().count())
                .filter(|&end| end <= cursor)
                .count();
            matches_before_cursor * shrink
        })
        .sum()
}
