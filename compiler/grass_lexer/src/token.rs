//! Token types shared by both scanners.

use grass_ir::Span;
use std::fmt;

/// What a token is. Grass and Lawn kinds never appear in the same list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Grass
    /// Run of `n` lowercase `w`: an arity at the start of a definition,
    /// otherwise an argument distance.
    Lower(u32),
    /// Run of `n` uppercase `W`: a function distance.
    Upper(u32),
    /// Run of `v`: segment separator.
    Separator,

    // Lawn
    /// Decimal arity opening a definition (always at least 1).
    Arity(u32),
    /// `:` declaration marker.
    Colon,
    /// `[` scope bracket.
    Open,
    /// `]` scope bracket.
    Close,
    /// `'` (distance 1) or `'n` (distance n).
    Relative(Option<u32>),
    /// Any other word; the text is recovered from the span.
    Name,
    /// A `'` word whose count is zero, non-numeric, or too large.
    InvalidRelative,
    /// A decimal word too large for an arity.
    InvalidArity,
}

impl TokenKind {
    /// Whether this token can appear as an application operand.
    pub fn is_operand(self) -> bool {
        matches!(
            self,
            TokenKind::Lower(_)
                | TokenKind::Upper(_)
                | TokenKind::Relative(_)
                | TokenKind::Name
                | TokenKind::InvalidRelative
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Lower(n) => write!(f, "w×{n}"),
            TokenKind::Upper(n) => write!(f, "W×{n}"),
            TokenKind::Separator => write!(f, "v"),
            TokenKind::Arity(n) => write!(f, "arity {n}"),
            TokenKind::Colon => write!(f, "`:`"),
            TokenKind::Open => write!(f, "`[`"),
            TokenKind::Close => write!(f, "`]`"),
            TokenKind::Relative(None) => write!(f, "`'`"),
            TokenKind::Relative(Some(n)) => write!(f, "`'{n}`"),
            TokenKind::Name => write!(f, "name"),
            TokenKind::InvalidRelative => write!(f, "malformed relative reference"),
            TokenKind::InvalidArity => write!(f, "malformed arity"),
        }
    }
}

/// A token with its source location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// The source text this token covers.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.to_range()).unwrap_or("")
    }
}

/// Ordered token output of a scanner.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Just the kinds, for tests and debugging output.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
