//! Match highlighting for search result titles and descriptions.
//!
//! User input is always escaped before it is compiled, so a query such as
//! `a.b*c` matches only that literal text.

use serde::Serialize;

use super::index::fold_case;

/// A run of text that either matched the query or did not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub matched: bool,
}

impl Span {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn hit(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Escape every regex metacharacter in `query`.
///
/// ```
/// use cards2cash_core::search::escape_pattern;
/// assert_eq!(escape_pattern("a.b*c"), r"a\.b\*c");
/// ```
pub fn escape_pattern(query: &str) -> String {
    regex::escape(query)
}

/// Split `text` into matched and unmatched spans for `query`.
///
/// Matching is literal and uses the same case folding as
/// [`SearchIndex::search`](super::SearchIndex::search), so every search
/// result highlights at least one span. A match that covers part of a
/// character's folded form highlights the whole character. Concatenating
/// the span texts always reproduces `text`. A blank query yields the whole
/// text as one unmatched span, and empty text yields no spans.
pub fn highlight(text: &str, query: &str) -> Vec<Span> {
    if text.is_empty() {
        return Vec::new();
    }
    if query.trim().is_empty() {
        return vec![Span::plain(text)];
    }

    let needle = fold_case(query);
    let folded = FoldedText::new(text);

    let mut spans = Vec::new();
    let mut cursor = 0;
    for (at, _) in folded.text.match_indices(&needle) {
        let start = folded.source_start(at).max(cursor);
        let end = folded.source_end(at + needle.len());
        if end <= cursor {
            continue;
        }
        if start > cursor {
            spans.push(Span::plain(&text[cursor..start]));
        }
        spans.push(Span::hit(&text[start..end]));
        cursor = end;
    }
    if cursor < text.len() {
        spans.push(Span::plain(&text[cursor..]));
    }
    spans
}

/// Case-folded copy of a text with a byte map back to the source.
struct FoldedText<'a> {
    source: &'a str,
    text: String,
    /// Source byte offset of the character each folded byte came from.
    origin: Vec<usize>,
}

impl<'a> FoldedText<'a> {
    fn new(source: &'a str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut origin = Vec::with_capacity(source.len());
        for (offset, c) in source.char_indices() {
            for lower in c.to_lowercase() {
                text.push(lower);
                origin.extend(std::iter::repeat(offset).take(lower.len_utf8()));
            }
        }
        Self {
            source,
            text,
            origin,
        }
    }

    /// Start of the source character that folded byte `at` belongs to.
    fn source_start(&self, at: usize) -> usize {
        self.origin.get(at).copied().unwrap_or(self.source.len())
    }

    /// End of the source character containing folded byte `end - 1`.
    fn source_end(&self, end: usize) -> usize {
        let Some(&offset) = end.checked_sub(1).and_then(|last| self.origin.get(last)) else {
            return 0;
        };
        let width = self.source[offset..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        offset + width
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
