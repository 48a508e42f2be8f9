//! Bracket expression parsing for `[seq]` and `[!seq]` globs.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ClassItem {
    Single(char),
    Range(char, char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CharClass {
    pub(crate) negated: bool,
    pub(crate) items: Vec<ClassItem>,
}

/// Parse the bracket expression opening at `start`.
///
/// Returns the position just past the closing `]` together with the parsed
/// class, or `None` when the bracket is never closed. A `]` immediately after
/// `[` or `[!` is a member rather than the terminator.
pub(crate) fn parse_class(chars: &[char], start: usize) -> Option<(usize, CharClass)> {
    let mut body_start = start + 1;
    let negated = chars.get(body_start) == Some(&'!');
    if negated {
        body_start += 1;
    }

    let mut end = if chars.get(body_start) == Some(&']') {
        body_start + 1
    } else {
        body_start
    };
    loop {
        match chars.get(end) {
            None => return None,
            Some(']') => break,
            Some(_) => end += 1,
        }
    }

    let body = chars.get(body_start..end)?;
    Some((
        end + 1,
        CharClass {
            negated,
            items: parse_items(body),
        },
    ))
}

fn parse_items(body: &[char]) -> Vec<ClassItem> {
    let mut items = Vec::new();
    let mut pos = 0;
    while let Some(&c) = body.get(pos) {
        if let (Some('-'), Some(&hi)) = (body.get(pos + 1), body.get(pos + 2)) {
            // Reversed ranges such as `[z-a]` contain nothing.
            if c <= hi {
                items.push(ClassItem::Range(c, hi));
            }
            pos += 3;
        } else {
            items.push(ClassItem::Single(c));
            pos += 1;
        }
    }
    items
}
