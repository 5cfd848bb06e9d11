//! Error codes for all interpreter diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1004`) with the first digit
//! indicating the phase. Used for `--explain` lookups and documentation.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Parse errors (splitting and name resolution)
/// - E6xxx: Runtime / eval errors
/// - E9xxx: Internal and host errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parse Errors (E1xxx)
    /// Malformed program structure
    E1001,
    /// Illegal name in a declaration
    E1002,
    /// Name declared twice in the same scope
    E1003,
    /// Reference to an undeclared name
    E1004,

    // Runtime Errors (E6xxx)
    /// Primitive applied to a value of the wrong kind
    E6001,
    /// Operand reaches past the start of the stack
    E6002,
    /// Closure nesting exceeded the configured depth
    E6003,

    // Internal Errors (E9xxx)
    /// I/O failure while reading source or writing output
    E9001,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E9001,
    ];

    /// The code as written in diagnostics, e.g. `"E1004"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Short kind name used in headlines and by tests, e.g. `"UnboundNameError"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "SyntaxError",
            ErrorCode::E1002 => "IllegalNameError",
            ErrorCode::E1003 => "NamespaceCollisionError",
            ErrorCode::E1004 => "UnboundNameError",
            ErrorCode::E6001 => "TypeError",
            ErrorCode::E6002 => "AddressError",
            ErrorCode::E6003 => "DepthExceededError",
            ErrorCode::E9001 => "IoError",
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 | ErrorCode::E1004
        )
    }

    pub fn is_eval_error(&self) -> bool {
        matches!(self, ErrorCode::E6001 | ErrorCode::E6002 | ErrorCode::E6003)
    }

    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
