// crates/core/src/classifier.rs
//! Significant-line classification.
//!
//! A line is significant when it is neither blank nor a pure line comment.
//! Block comments are removed from the whole text before the text is split
//! into lines, so a line that only held a block comment becomes blank.
//!
//! The block stripping is a literal, non-greedy delimiter match: nested
//! comments and delimiters inside string literals are not understood.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::language::LanguageSpec;

/// Count significant lines in raw file bytes.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD before counting.
#[must_use]
pub fn count_bytes(input: &[u8], spec: &LanguageSpec) -> usize {
    let text = String::from_utf8_lossy(input);
    count_significant_lines(&text, spec)
}

/// Count significant lines in decoded text.
#[must_use]
pub fn count_significant_lines(text: &str, spec: &LanguageSpec) -> usize {
    let stripped = strip_block_comments(text, spec);
    stripped
        .split('\n')
        .filter(|line| is_significant(line, spec))
        .count()
}

/// 空行でも行コメントのみでもなければ true
#[must_use]
pub fn is_significant(line: &str, spec: &LanguageSpec) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && (!spec.has_inline_comments() || !trimmed.starts_with(spec.inline))
}

/// Remove every `block_start ... block_end` region from `text`.
///
/// Returns the input unchanged (borrowed) when the language has no block
/// comments or no complete region exists.
#[must_use]
pub fn strip_block_comments<'a>(text: &'a str, spec: &LanguageSpec) -> Cow<'a, str> {
    if !spec.has_block_comments() {
        return Cow::Borrowed(text);
    }

    let (start, end) = (spec.block_start, spec.block_end);
    let mut found = find_block(text, start, end);
    if found.is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some((open, close)) = found {
        out.push_str(&rest[..open]);
        rest = &rest[close..];
        found = find_block(rest, start, end);
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// Byte range `[open, close)` of the first complete block comment.
///
/// The closing delimiter is searched after the opening one, so identical
/// delimiters (`"""`) pair up. An unterminated opener yields `None`, and so
/// does every later opener.
fn find_block(text: &str, start: &str, end: &str) -> Option<(usize, usize)> {
    let open = text.find(start)?;
    let body = open + start.len();
    let close = body + text[body..].find(end)? + end.len();
    Some((open, close))
}
