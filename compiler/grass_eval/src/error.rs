//! Runtime errors.
//!
//! Runtime failures have no source span: a resolved program carries only
//! distances. Diagnostics explain the failure with notes instead.

use grass_diagnostic::{Diagnostic, ErrorCode};

use crate::value::Primitive;

/// Result alias for evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("non-character argument to {primitive}: got {found}")]
    TypeError {
        primitive: Primitive,
        found: &'static str,
    },
    #[error("operand distance {distance} reaches past the start of the stack")]
    AddressError { distance: u32 },
    #[error("call depth exceeded the limit of {limit} frames")]
    DepthExceeded { limit: usize },
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::TypeError { .. } => ErrorCode::E6001,
            EvalError::AddressError { .. } => ErrorCode::E6002,
            EvalError::DepthExceeded { .. } => ErrorCode::E6003,
            EvalError::Io(_) => ErrorCode::E9001,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        self.code().kind_name()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            EvalError::TypeError { primitive, .. } => {
                diag.with_note(format!("`{primitive}` only accepts characters"))
            }
            EvalError::AddressError { .. } => diag.with_note(
                "a closure can only see slots defined before it and its own arguments",
            ),
            EvalError::DepthExceeded { .. } => {
                diag.with_note("raise the limit with `--max-depth=N`")
            }
            EvalError::Io(_) => diag,
        }
    }
}
