//! Grass IR - shared types for the Grass interpreter.
//!
//! This crate contains the data model that flows between phases:
//! - Spans for source locations
//! - Operands (relative stack distances)
//! - Closures and top-level applications
//! - The flat, position-addressed `Program`
//!
//! Every phase after the lexer speaks in these types: the parser produces a
//! [`Program`], the evaluator consumes one, and the transcoder renders one
//! back to text.

/// Compile-time assertion that a type has a specific size.
///
/// Used to keep frequently-copied types small.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod program;
mod span;

pub use program::{Application, Closure, Entry, Operand, Program};
pub use span::Span;
