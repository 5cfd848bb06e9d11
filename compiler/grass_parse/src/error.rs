//! Parse error types.
//!
//! Every variant is fatal. Variants group into the four reported kinds:
//! syntax errors (E1001), illegal names (E1002), namespace collisions
//! (E1003), and unbound names (E1004).

use grass_diagnostic::{Diagnostic, ErrorCode};
use grass_ir::Span;
use grass_lexer::TokenKind;

/// What went wrong while splitting or resolving a program.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    // === Syntax (E1001) ===
    #[error("unexpected `]` with no open definition")]
    UnexpectedClose,
    #[error("definition opened inside another definition")]
    NestedDefinition { outer: Span },
    #[error("definition is never closed; expected `]`")]
    UnterminatedDefinition,
    #[error("`[` must directly follow an arity")]
    MisplacedOpen,
    #[error("segment has an odd number of operands ({count})")]
    OddOperandCount { count: usize },
    #[error("application before the first definition")]
    ApplicationBeforeDefinition,
    #[error("`:` must be in function position")]
    MisplacedDeclaration,
    #[error("malformed relative reference `{text}`")]
    InvalidRelative { text: String },
    #[error("arity `{text}` is out of range")]
    InvalidArity { text: String },
    #[error("unexpected {found}")]
    UnexpectedToken { found: TokenKind },
    #[error("program is empty")]
    EmptyProgram,
    #[error("reference reaches past the addressable stack")]
    TooManySlots,

    // === Names ===
    #[error("illegal name `{name}`")]
    IllegalName { name: String },
    #[error("name `{name}` is already declared")]
    NamespaceCollision {
        name: String,
        /// Where the existing binding was declared; `None` for built-ins.
        previous: Option<Span>,
    },
    #[error("unbound name `{name}`")]
    UnboundName { name: String },
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::IllegalName { .. } => ErrorCode::E1002,
            ParseErrorKind::NamespaceCollision { .. } => ErrorCode::E1003,
            ParseErrorKind::UnboundName { .. } => ErrorCode::E1004,
            _ => ErrorCode::E1001,
        }
    }
}

/// A parse failure at a source location.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Kind name as reported to users, e.g. `"SyntaxError"`.
    pub fn kind_name(&self) -> &'static str {
        self.code().kind_name()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        match &self.kind {
            ParseErrorKind::NestedDefinition { outer } => diag
                .with_label(self.span, "nested definition")
                .with_secondary_label(*outer, "enclosing definition opened here")
                .with_note("close the enclosing definition with `]` first"),
            ParseErrorKind::UnterminatedDefinition => {
                diag.with_label(self.span, "definition opened here")
            }
            ParseErrorKind::OddOperandCount { .. } => diag
                .with_label(self.span, "in this segment")
                .with_note("every application needs a function and an argument"),
            ParseErrorKind::ApplicationBeforeDefinition => diag
                .with_label(self.span, "no definition precedes this")
                .with_note("a program starts with a definition such as `1 [ ... ]`")
                .with_note(
                    "Grass text ignores everything before its first definition, \
                     so leading applications cannot be represented",
                ),
            ParseErrorKind::IllegalName { .. } => diag
                .with_label(self.span, "reserved by reference syntax")
                .with_note("names may not look like `.1` or `'2`, and may not be `:`"),
            ParseErrorKind::NamespaceCollision { previous, .. } => {
                let diag = diag.with_label(self.span, "declared again here");
                match previous {
                    Some(span) => diag.with_secondary_label(*span, "first declared here"),
                    None => diag.with_note("built-in names cannot be redeclared"),
                }
            }
            ParseErrorKind::UnboundName { .. } => diag
                .with_label(self.span, "not declared in this scope")
                .with_note("names declared inside a definition vanish at its `]`"),
            _ => diag.with_label(self.span, "here"),
        }
    }
}
