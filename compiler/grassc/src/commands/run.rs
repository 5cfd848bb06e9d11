//! The `run` command: parse and execute a program file.

use grassc::options::RunOptions;
use grassc::{InputSource, OutputSink};
use tracing::debug;

use super::{fail, read_file};

/// Run a program with stdin as input and stdout as output.
pub fn run_file(options: &RunOptions) {
    let content = read_file(&options.file);
    let dialect = options.dialect();
    let result = grassc::run_source(
        &content,
        dialect,
        options.config,
        InputSource::stdin(),
        OutputSink::stdout(options.output_mode),
    );
    match result {
        Ok(value) => debug!(%value, "program finished"),
        Err(err) => fail(&err, &content, &options.file),
    }
}
