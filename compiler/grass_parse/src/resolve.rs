//! Name resolution: segments to relative operand pairs.
//!
//! The resolver walks segments in order against a single [`NameTable`].
//! Each emitted pair will produce one runtime slot, so the table advances
//! after every pair. Declaration pairs (`: name`) bind the most recent slot
//! and produce nothing.

use grass_ir::{Application, Operand, Span};
use grass_lexer::{Token, TokenKind};
use tracing::trace;

use crate::error::{ParseError, ParseErrorKind};
use crate::scope::{is_reserved_name, NameTable};
use crate::split::Segment;

/// A segment with every operand turned into a distance.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ResolvedSegment {
    /// `Some(k)` for a definition of arity `k`.
    pub arity: Option<u32>,
    pub applications: Vec<Application>,
}

/// Resolves the segments of one program.
pub struct Resolver<'src> {
    source: &'src str,
    table: NameTable,
}

impl<'src> Resolver<'src> {
    pub fn new(source: &'src str) -> Self {
        Resolver {
            source,
            table: NameTable::new(),
        }
    }

    pub fn resolve(&mut self, segment: &Segment) -> Result<ResolvedSegment, ParseError> {
        let arity = segment.header.map(|h| h.arity);
        let start = arity.map(|k| self.table.open_definition(k));
        let local = start.is_some();

        let mut applications = Vec::with_capacity(segment.operands.len() / 2);
        for pair in segment.operands.chunks_exact(2) {
            let (func, arg) = (pair[0], pair[1]);
            if func.kind == TokenKind::Colon {
                self.declare(arg, local)?;
                continue;
            }
            if arg.kind == TokenKind::Colon {
                return Err(ParseError::new(
                    ParseErrorKind::MisplacedDeclaration,
                    arg.span,
                ));
            }
            let application = Application::new(self.operand(func)?, self.operand(arg)?);
            trace!(%application, depth = self.table.depth(), "resolved pair");
            applications.push(application);
            self.table.advance();
        }

        if let Some(start) = start {
            self.table.close_definition(start);
        }
        Ok(ResolvedSegment {
            arity,
            applications,
        })
    }

    fn declare(&mut self, token: Token, local: bool) -> Result<(), ParseError> {
        let name = token.text(self.source);
        let legal = token.kind == TokenKind::Name && !is_reserved_name(name);
        if !legal {
            return Err(ParseError::new(
                ParseErrorKind::IllegalName {
                    name: name.to_owned(),
                },
                token.span,
            ));
        }
        self.table
            .declare(name, local, token.span)
            .map_err(|previous| {
                ParseError::new(
                    ParseErrorKind::NamespaceCollision {
                        name: name.to_owned(),
                        previous,
                    },
                    token.span,
                )
            })?;
        trace!(binding = name, local, stamp = self.table.depth(), "declared");
        Ok(())
    }

    fn operand(&self, token: Token) -> Result<Operand, ParseError> {
        let distance = match token.kind {
            TokenKind::Lower(n) | TokenKind::Upper(n) | TokenKind::Relative(Some(n)) => {
                u64::from(n)
            }
            TokenKind::Relative(None) => 1,
            TokenKind::Name => {
                let name = token.text(self.source);
                self.table.distance(name).ok_or_else(|| {
                    ParseError::new(
                        ParseErrorKind::UnboundName {
                            name: name.to_owned(),
                        },
                        token.span,
                    )
                })?
            }
            TokenKind::InvalidRelative => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidRelative {
                        text: token.text(self.source).to_owned(),
                    },
                    token.span,
                ));
            }
            found => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken { found },
                    token.span,
                ));
            }
        };
        to_operand(distance, token.span)
    }
}

fn to_operand(distance: u64, span: Span) -> Result<Operand, ParseError> {
    u32::try_from(distance)
        .ok()
        .and_then(Operand::new)
        .ok_or_else(|| ParseError::new(ParseErrorKind::TooManySlots, span))
}
