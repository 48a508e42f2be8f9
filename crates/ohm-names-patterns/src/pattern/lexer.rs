//! Glob lexer converting a single pattern alternative into semantic tokens.

use super::class::{CharClass, parse_class};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Literal(String),
    /// `*`: any run of characters, possibly empty.
    AnyRun,
    /// `?`: exactly one character.
    AnyChar,
    /// `[...]` or `[!...]`.
    Class(CharClass),
}

pub(crate) fn lex_glob(pattern: &str) -> Vec<Token> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut pos = 0;

    let flush_literal = |literal: &mut String, tokens: &mut Vec<Token>| {
        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(literal)));
        }
    };

    while let Some(&c) = chars.get(pos) {
        match c {
            '*' => {
                flush_literal(&mut literal, &mut tokens);
                // `**` behaves exactly like `*`.
                if tokens.last() != Some(&Token::AnyRun) {
                    tokens.push(Token::AnyRun);
                }
                pos += 1;
            }
            '?' => {
                flush_literal(&mut literal, &mut tokens);
                tokens.push(Token::AnyChar);
                pos += 1;
            }
            '[' => {
                if let Some((next_pos, class)) = parse_class(&chars, pos) {
                    flush_literal(&mut literal, &mut tokens);
                    tokens.push(Token::Class(class));
                    pos = next_pos;
                } else {
                    literal.push('[');
                    pos += 1;
                }
            }
            _ => {
                literal.push(c);
                pos += 1;
            }
        }
    }

    flush_literal(&mut literal, &mut tokens);
    tokens
}
