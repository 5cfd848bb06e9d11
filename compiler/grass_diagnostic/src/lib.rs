//! Diagnostic system for Grass error reporting.
//!
//! Every fatal condition in the pipeline, from a stray `]` to a successor
//! applied to a closure, ends up as a [`Diagnostic`]:
//! - an error code for searchability (`grass --explain E1004`)
//! - a message saying what went wrong
//! - an optional primary span saying where
//! - notes adding context
//!
//! Phases own their error types and convert into `Diagnostic` at the
//! boundary; emitters render diagnostics for humans.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
