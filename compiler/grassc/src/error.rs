//! Errors surfaced by the driver.

use grass_diagnostic::{Diagnostic, ErrorCode};
use grass_eval::EvalError;
use grass_parse::ParseError;
use std::io;
use std::path::PathBuf;

/// Any failure between reading a file and finishing a run.
#[derive(Debug, thiserror::Error)]
pub enum GrassError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("{}", read_message(.path, .source))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn read_message(path: &std::path::Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}

impl GrassError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GrassError::Parse(err) => err.code(),
            GrassError::Eval(err) => err.code(),
            GrassError::Read { .. } | GrassError::Write { .. } => ErrorCode::E9001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            GrassError::Parse(err) => err.to_diagnostic(),
            GrassError::Eval(err) => err.to_diagnostic(),
            GrassError::Read { .. } | GrassError::Write { .. } => {
                Diagnostic::error(ErrorCode::E9001).with_message(self.to_string())
            }
        }
    }

    /// Whether the diagnostic points into program text.
    pub fn has_source_location(&self) -> bool {
        matches!(self, GrassError::Parse(_))
    }
}

#[cfg(test)]
mod tests;
