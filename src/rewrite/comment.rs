//! Scanner for C-style `/* ... */` block comments.

use std::ops::Range;

/// Returns the byte ranges of every block comment in `source`, delimiters
/// included.
///
/// A comment ends at the first `*/` after its opening `/*`, so `/*/` does
/// not close itself. An unterminated comment is not reported.
pub fn block_comments(source: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = source[cursor..].find("/*") {
        let start = cursor + offset;
        let body = start + 2;
        match source[body..].find("*/") {
            Some(end) => {
                let end = body + end + 2;
                spans.push(start..end);
                cursor = end;
            }
            None => break,
        }
    }

    spans
}

/// Replaces `old` with `new` inside every block comment that contains it.
///
/// Text outside comments is copied unchanged. Returns the rewritten text
/// and the number of replacements, or `None` if `source` has no block
/// comment at all.
pub fn replace_in_comments(source: &str, old: &str, new: &str) -> Option<(String, usize)> {
    let spans = block_comments(source);
    if spans.is_empty() {
        return None;
    }
    if old.is_empty() {
        return Some((source.to_string(), 0));
    }

    let mut output = String::with_capacity(source.len());
    let mut replaced = 0;
    let mut last = 0;

    for span in spans {
        output.push_str(&source[last..span.start]);
        let comment = &source[span.clone()];
        let count = comment.matches(old).count();
        if count > 0 {
            output.push_str(&comment.replace(old, new));
            replaced += count;
        } else {
            output.push_str(comment);
        }
        last = span.end;
    }
    output.push_str(&source[last..]);

    Some((output, replaced))
}
