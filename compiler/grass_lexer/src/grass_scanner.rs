//! Scanner for the minimal Grass dialect.
//!
//! Only `w`, `W`, `v` and their full-width forms carry meaning. Any other
//! character is dropped before runs are formed, so `w w` is a single run of
//! two. Everything before the first `w` is ignored.

use grass_ir::Span;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind, TokenList};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Class {
    Lower,
    Upper,
    Separator,
}

fn classify(c: char) -> Option<Class> {
    match c {
        'w' | 'ｗ' => Some(Class::Lower),
        'W' | 'Ｗ' => Some(Class::Upper),
        'v' | 'ｖ' => Some(Class::Separator),
        _ => None,
    }
}

/// A run of same-class characters being accumulated.
struct Run {
    class: Class,
    count: u32,
    start: u32,
    end: u32,
}

impl Run {
    fn finish(&self) -> Token {
        let kind = match self.class {
            Class::Lower => TokenKind::Lower(self.count),
            Class::Upper => TokenKind::Upper(self.count),
            Class::Separator => TokenKind::Separator,
        };
        Token::new(kind, Span::new(self.start, self.end))
    }
}

pub(crate) fn scan(source: &str) -> TokenList {
    let mut cursor = Cursor::new(source);
    let mut tokens = TokenList::new();

    cursor.eat_while(|c| classify(c) != Some(Class::Lower));

    let mut run: Option<Run> = None;
    while let Some(c) = cursor.current() {
        let start = cursor.pos();
        cursor.advance();
        let Some(class) = classify(c) else {
            continue;
        };
        let end = cursor.pos();
        match &mut run {
            Some(current) if current.class == class => {
                current.count += 1;
                current.end = end;
            }
            _ => {
                if let Some(done) = run.take() {
                    tokens.push(done.finish());
                }
                run = Some(Run {
                    class,
                    count: 1,
                    start,
                    end,
                });
            }
        }
    }
    if let Some(done) = run {
        tokens.push(done.finish());
    }
    tokens
}
