//! Parser for Grass and Lawn programs.
//!
//! Parsing runs in three passes over a token list:
//!
//! 1. [`split`] groups tokens into segments (definitions and top-level
//!    application lists) and checks bracket structure and operand parity.
//! 2. [`resolve`] turns every operand into a relative stack distance using
//!    an index-stamped name table ([`scope`]).
//! 3. [`emit`] flattens resolved segments into a [`Program`].
//!
//! Every failure is fatal; the first error stops the parse.

mod emit;
mod error;
mod resolve;
mod scope;
mod split;

pub use emit::Emitter;
pub use error::{ParseError, ParseErrorKind};
pub use resolve::{ResolvedSegment, Resolver};
pub use scope::{is_reserved_name, Binding, NameTable};
pub use split::{split_grass, split_lawn, Header, Segment};

use grass_ir::Program;
use grass_lexer::{Dialect, TokenList};
use tracing::debug;

/// Parse `source` as `dialect` into a resolved program.
pub fn parse(source: &str, dialect: Dialect) -> Result<Program, ParseError> {
    let tokens = grass_lexer::lex(source, dialect);
    parse_tokens(source, &tokens, dialect)
}

/// Parse an already-lexed token list. `source` must be the text `tokens`
/// were produced from.
pub fn parse_tokens(
    source: &str,
    tokens: &TokenList,
    dialect: Dialect,
) -> Result<Program, ParseError> {
    let segments = match dialect {
        Dialect::Grass => split_grass(source, tokens)?,
        Dialect::Lawn => split_lawn(source, tokens)?,
    };

    let mut resolver = Resolver::new(source);
    let mut emitter = Emitter::new();
    for segment in &segments {
        emitter.emit(resolver.resolve(segment)?);
    }
    let program = emitter.finish();
    debug!(
        %dialect,
        closures = program.closure_count(),
        applications = program.application_count(),
        "parsed program"
    );
    Ok(program)
}
