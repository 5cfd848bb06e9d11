//! Structural splitter: token list to segments.
//!
//! A segment is either one definition (an arity followed by its body) or a
//! run of top-level operands. The splitter checks bracket structure and
//! operand parity; it knows nothing about names.

use grass_ir::Span;
use grass_lexer::{Token, TokenKind, TokenList};
use tracing::debug;

use crate::error::{ParseError, ParseErrorKind};

/// Arity declaration that opens a definition.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Header {
    pub arity: u32,
    pub span: Span,
}

/// One definition or one top-level application list.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Segment {
    /// `Some` for definitions.
    pub header: Option<Header>,
    /// Operand tokens in source order, taken two at a time. Declaration
    /// pairs (`: name`) are included.
    pub operands: Vec<Token>,
    pub span: Span,
}

impl Segment {
    fn definition(arity: u32, span: Span) -> Self {
        Segment {
            header: Some(Header { arity, span }),
            operands: Vec::new(),
            span,
        }
    }

    fn top_level(span: Span) -> Self {
        Segment {
            header: None,
            operands: Vec::new(),
            span,
        }
    }

    pub fn is_definition(&self) -> bool {
        self.header.is_some()
    }

    fn push(&mut self, token: Token) {
        self.span = self.span.merge(token.span);
        self.operands.push(token);
    }

    fn finish(self) -> Result<Self, ParseError> {
        if self.operands.len() % 2 == 0 {
            Ok(self)
        } else {
            Err(ParseError::new(
                ParseErrorKind::OddOperandCount {
                    count: self.operands.len(),
                },
                self.span,
            ))
        }
    }
}

/// Split Lawn tokens into segments.
pub fn split_lawn(source: &str, tokens: &TokenList) -> Result<Vec<Segment>, ParseError> {
    let mut segments = Vec::new();
    // At most one of these is `Some` at a time.
    let mut open: Option<Segment> = None;
    let mut top: Option<Segment> = None;
    let mut after_arity = false;

    for &token in tokens {
        let span = token.span;
        match token.kind {
            TokenKind::Arity(arity) => {
                if let Some(outer) = &open {
                    let outer = outer.header.map_or(outer.span, |h| h.span);
                    return Err(ParseError::new(
                        ParseErrorKind::NestedDefinition { outer },
                        span,
                    ));
                }
                if let Some(segment) = top.take() {
                    segments.push(segment.finish()?);
                }
                open = Some(Segment::definition(arity, span));
            }
            TokenKind::Open => match &mut open {
                Some(definition) if after_arity => {
                    definition.span = definition.span.merge(span);
                }
                _ => return Err(ParseError::new(ParseErrorKind::MisplacedOpen, span)),
            },
            TokenKind::Close => match open.take() {
                Some(mut definition) => {
                    definition.span = definition.span.merge(span);
                    segments.push(definition.finish()?);
                }
                None => return Err(ParseError::new(ParseErrorKind::UnexpectedClose, span)),
            },
            TokenKind::Colon | TokenKind::Relative(_) | TokenKind::Name => {
                if let Some(definition) = &mut open {
                    definition.push(token);
                } else if segments.is_empty() {
                    return Err(ParseError::new(
                        ParseErrorKind::ApplicationBeforeDefinition,
                        span,
                    ));
                } else {
                    top.get_or_insert_with(|| Segment::top_level(span))
                        .push(token);
                }
            }
            TokenKind::InvalidRelative => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidRelative {
                        text: token.text(source).to_owned(),
                    },
                    span,
                ));
            }
            TokenKind::InvalidArity => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidArity {
                        text: token.text(source).to_owned(),
                    },
                    span,
                ));
            }
            found @ (TokenKind::Lower(_) | TokenKind::Upper(_) | TokenKind::Separator) => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken { found },
                    span,
                ));
            }
        }
        after_arity = matches!(token.kind, TokenKind::Arity(_));
    }

    if let Some(definition) = open {
        let span = definition.header.map_or(definition.span, |h| h.span);
        return Err(ParseError::new(
            ParseErrorKind::UnterminatedDefinition,
            span,
        ));
    }
    if let Some(segment) = top {
        segments.push(segment.finish()?);
    }
    finish_program(segments, source)
}

/// Split Grass tokens into segments.
///
/// The scanner has already dropped everything before the first `w`, so the
/// first segment is always a definition.
pub fn split_grass(source: &str, tokens: &TokenList) -> Result<Vec<Segment>, ParseError> {
    let mut segments = Vec::new();
    let mut current: Option<Segment> = None;

    for &token in tokens {
        match token.kind {
            TokenKind::Separator => {
                if let Some(segment) = current.take() {
                    segments.push(segment.finish()?);
                }
            }
            TokenKind::Lower(arity) if current.is_none() => {
                current = Some(Segment::definition(arity, token.span));
            }
            TokenKind::Lower(_) | TokenKind::Upper(_) => {
                current
                    .get_or_insert_with(|| Segment::top_level(token.span))
                    .push(token);
            }
            found => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken { found },
                    token.span,
                ));
            }
        }
    }
    if let Some(segment) = current {
        segments.push(segment.finish()?);
    }
    finish_program(segments, source)
}

fn finish_program(segments: Vec<Segment>, source: &str) -> Result<Vec<Segment>, ParseError> {
    if segments.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::EmptyProgram,
            Span::whole(source),
        ));
    }
    debug!(
        segments = segments.len(),
        definitions = segments.iter().filter(|s| s.is_definition()).count(),
        "split program"
    );
    Ok(segments)
}
