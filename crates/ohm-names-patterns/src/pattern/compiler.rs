//! Convert lexed glob tokens into anchored regular-expression sources.

use super::class::{CharClass, ClassItem};
use super::lexer::{Token, lex_glob};

/// Regex fragment that matches no input at all.
const NEVER: &str = r"[^\s\S]";

/// Build an anchored regular expression from a `|`-separated glob pattern.
///
/// Every alternative is translated independently and the results are joined
/// with regex alternation. The empty pattern has no alternatives and yields a
/// regex that never matches.
///
/// # Examples
/// ```
/// use ohm_names_patterns::build_regex_from_glob;
/// assert_eq!(build_regex_from_glob("*.csv"), r"^(?s:(?:.*\.csv))$");
/// assert_eq!(build_regex_from_glob("A|B"), r"^(?s:(?:A)|(?:B))$");
/// ```
#[must_use]
pub fn build_regex_from_glob(pattern: &str) -> String {
    if pattern.is_empty() {
        return format!("^{NEVER}$");
    }

    let alternatives: Vec<String> = pattern
        .split('|')
        .map(|alternative| format!("(?:{})", translate_alternative(alternative)))
        .collect();
    format!("^(?s:{})$", alternatives.join("|"))
}

fn translate_alternative(alternative: &str) -> String {
    let mut regex = String::with_capacity(alternative.len().saturating_mul(2));
    for token in lex_glob(alternative) {
        match token {
            Token::Literal(text) => regex.push_str(&regex::escape(&text)),
            Token::AnyRun => regex.push_str(".*"),
            Token::AnyChar => regex.push('.'),
            Token::Class(class) => push_class(&mut regex, &class),
        }
    }
    regex
}

fn push_class(regex: &mut String, class: &CharClass) {
    if class.items.is_empty() {
        // An empty set matches nothing; its complement matches any character.
        regex.push_str(if class.negated { "." } else { NEVER });
        return;
    }

    regex.push('[');
    if class.negated {
        regex.push('^');
    }
    for item in &class.items {
        match *item {
            ClassItem::Single(c) => push_class_char(regex, c),
            ClassItem::Range(lo, hi) => {
                push_class_char(regex, lo);
                regex.push('-');
                push_class_char(regex, hi);
            }
        }
    }
    regex.push(']');
}

fn push_class_char(regex: &mut String, c: char) {
    let mut buf = [0u8; 4];
    regex.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}
