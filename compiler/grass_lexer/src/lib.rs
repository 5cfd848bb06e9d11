//! Tokenizers for the two Grass surface dialects.
//!
//! - **Grass** is the minimal dialect: runs of `w`, `W`, and `v` (or their
//!   full-width forms). Every other character is ignored, as is everything
//!   before the first `w`.
//! - **Lawn** is the extended dialect: decimal arities, `:` declarations,
//!   `'` relative references, `[`/`]` brackets, `#...#` comments, and
//!   whitespace-separated names.
//!
//! Both scanners are pure functions of the text. Malformed words are encoded
//! as token kinds (`InvalidRelative`, `InvalidArity`) rather than errors;
//! the parser decides how to report them.

mod cursor;
mod dialect;
mod grass_scanner;
mod lawn_scanner;
mod token;

pub use cursor::Cursor;
pub use dialect::Dialect;
pub use token::{Token, TokenKind, TokenList};

/// Tokenize `source` according to `dialect`.
pub fn lex(source: &str, dialect: Dialect) -> TokenList {
    match dialect {
        Dialect::Grass => grass_scanner::scan(source),
        Dialect::Lawn => lawn_scanner::scan(source),
    }
}
