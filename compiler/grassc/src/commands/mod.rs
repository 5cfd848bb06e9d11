//! Command handlers for the `grass` binary.
//!
//! Shared helpers for reading files and reporting errors live here.

use grass_diagnostic::emitter::{stderr_emitter, ColorMode, DiagnosticEmitter};
use grassc::GrassError;
use std::path::Path;

mod debug;
mod explain;
mod run;
mod transcode;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::run_file;
pub use transcode::transcode_file;

/// Read a program file, exiting with a message on failure.
fn read_file(path: &Path) -> String {
    match grassc::read_source(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// Print `err` as a diagnostic on stderr and exit with status 1.
fn fail(err: &GrassError, source: &str, path: &Path) -> ! {
    let mut emitter = stderr_emitter(ColorMode::Auto).with_file_path(&path.display().to_string());
    if err.has_source_location() {
        emitter = emitter.with_source(source);
    }
    emitter.emit(&err.to_diagnostic());
    emitter.flush();
    std::process::exit(1);
}
