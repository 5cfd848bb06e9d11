//! Grass driver library.
//!
//! Glues the phases together behind a few whole-program calls:
//!
//! ```text
//! source ──► lex ──► split ──► resolve ──► Program ──┬──► Machine ──► output
//!                                                    └──► render  ──► Grass text
//! ```
//!
//! The `grass` binary is a thin layer over these functions.

mod error;
pub mod logging;
pub mod options;

pub use error::GrassError;
pub use grass_diagnostic::{Diagnostic, ErrorCode};
pub use grass_eval::{
    BufferOutput, InputSource, MachineConfig, OutputMode, OutputSink, Value, DEFAULT_MAX_DEPTH,
};
pub use grass_ir::Program;
pub use grass_lexer::Dialect;

use std::path::Path;
use tracing::debug;

/// Parse a whole program.
pub fn parse_source(source: &str, dialect: Dialect) -> Result<Program, GrassError> {
    Ok(grass_parse::parse(source, dialect)?)
}

/// Parse and execute a program.
///
/// Nothing runs if parsing fails, so `output` stays untouched. On a runtime
/// error any bytes already written stay in `output`.
pub fn run_source(
    source: &str,
    dialect: Dialect,
    config: MachineConfig,
    input: InputSource,
    output: OutputSink,
) -> Result<Value, GrassError> {
    let program = parse_source(source, dialect)?;
    debug!(entries = program.len(), ?config, "running program");
    Ok(grass_eval::run(&program, config, input, output)?)
}

/// Parse a program and render it as Grass text.
///
/// A `width` of zero keeps the output on one line.
pub fn transcode_source(source: &str, dialect: Dialect, width: usize) -> Result<String, GrassError> {
    let program = parse_source(source, dialect)?;
    Ok(grass_fmt::render_wrapped(&program, width))
}

/// Read a program file as UTF-8.
pub fn read_source(path: &Path) -> Result<String, GrassError> {
    std::fs::read_to_string(path).map_err(|source| GrassError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write transcoder output to `path`.
pub fn write_output(path: &Path, text: &str) -> Result<(), GrassError> {
    std::fs::write(path, text).map_err(|source| GrassError::Write {
        path: path.to_path_buf(),
        source,
    })
}
