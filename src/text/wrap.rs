//! # Line Wrapping
//!
//! Greedy word wrap used for option labels.
//!
//! Tokens are runs of non-whitespace. They are appended to the current line,
//! joined by a single space, while `line + 1 + token` still fits in `width`.
//! A token longer than `width` is first cut into `width - 1` character chunks,
//! each but the last ending in `-`, and the chunks are packed the same way.
//!
//! Lengths are counted in `char`s, never bytes, so labels with non-ASCII
//! text are never split inside a code point.

/// Wrap `text` into lines of at most `width` characters.
///
/// Always returns at least one line; blank input yields a single empty line.
/// The only line that may exceed `width` is a hyphenated chunk when
/// `width == 1` (one character plus the hyphen).
///
/// ```
/// use anchor_select::text::wrap;
///
/// assert_eq!(wrap("docs: update the readme", 12), vec!["docs: update", "the readme"]);
/// assert_eq!(wrap("abcdefgh", 5), vec!["abcd-", "efgh"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for token in text.split_whitespace() {
        if char_len(token) > width {
            for chunk in split_token(token, width) {
                push_token(&mut lines, &mut current, &chunk, width);
            }
        } else {
            push_token(&mut lines, &mut current, token, width);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Append `token` to `current`, flushing `current` into `lines` first if the
/// token does not fit.
fn push_token(lines: &mut Vec<String>, current: &mut String, token: &str, width: usize) {
    if current.is_empty() {
        current.push_str(token);
    } else if char_len(current) + char_len(token) + 1 > width {
        lines.push(std::mem::take(current));
        current.push_str(token);
    } else {
        current.push(' ');
        current.push_str(token);
    }
}

/// Cut an over-long token into hyphenated chunks of `width - 1` characters.
fn split_token(token: &str, width: usize) -> Vec<String> {
    let step = width.saturating_sub(1).max(1);
    let chars: Vec<char> = token.chars().collect();
    let mut parts = Vec::new();
    let mut rest = chars.as_slice();

    while rest.len() > step {
        let (head, tail) = rest.split_at(step);
        let mut part: String = head.iter().collect();
        part.push('-');
        parts.push(part);
        rest = tail;
    }
    parts.push(rest.iter().collect());
    parts
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
