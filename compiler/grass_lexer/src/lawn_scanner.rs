//! Scanner for the Lawn dialect.
//!
//! Lawn text is whitespace-separated words. `:`, `[`, and `]` are tokens
//! even when glued to a word, and `#...#` comments are dropped (an
//! unclosed comment runs to the end of the input). Words are classified as:
//!
//! - all decimal digits: an arity, except that a zero value is a name (`0`
//!   is the built-in zero character)
//! - leading `'`: a relative reference with an optional positive count
//! - anything else: a name

use grass_ir::Span;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind, TokenList};

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, ':' | '[' | ']' | '#')
}

/// Parse a string of ASCII digits. Rejects signs, blanks, and overflow.
fn parse_decimal(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn classify_word(word: &str) -> TokenKind {
    if let Some(count) = word.strip_prefix('\'') {
        if count.is_empty() {
            return TokenKind::Relative(None);
        }
        return match parse_decimal(count) {
            Some(n) if n > 0 => TokenKind::Relative(Some(n)),
            _ => TokenKind::InvalidRelative,
        };
    }
    if word.bytes().all(|b| b.is_ascii_digit()) {
        return match parse_decimal(word) {
            Some(0) => TokenKind::Name,
            Some(n) => TokenKind::Arity(n),
            None => TokenKind::InvalidArity,
        };
    }
    TokenKind::Name
}

pub(crate) fn scan(source: &str) -> TokenList {
    let mut cursor = Cursor::new(source);
    let mut tokens = TokenList::new();

    while let Some(c) = cursor.current() {
        let start = cursor.pos();
        let kind = match c {
            c if c.is_whitespace() => {
                cursor.eat_while(char::is_whitespace);
                continue;
            }
            '#' => {
                cursor.advance();
                cursor.eat_past(b'#');
                continue;
            }
            ':' => {
                cursor.advance();
                TokenKind::Colon
            }
            '[' => {
                cursor.advance();
                TokenKind::Open
            }
            ']' => {
                cursor.advance();
                TokenKind::Close
            }
            _ => {
                cursor.eat_while(is_word_char);
                classify_word(cursor.slice_from(start))
            }
        };
        tokens.push(Token::new(kind, Span::new(start, cursor.pos())));
    }
    tokens
}

#[cfg(test)]
mod tests;
