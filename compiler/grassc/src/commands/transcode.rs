//! The `transcode` command: rewrite a program in Grass syntax.

use grassc::options::TranscodeOptions;

use super::{fail, read_file};

/// Transcode a Lawn file (or re-render a Grass file) to stdout or `-o`.
pub fn transcode_file(options: &TranscodeOptions) {
    let content = read_file(&options.file);
    let dialect = grassc::Dialect::from_path(&options.file);
    let text = match grassc::transcode_source(&content, dialect, options.width) {
        Ok(text) => text,
        Err(err) => fail(&err, &content, &options.file),
    };
    match &options.output {
        Some(path) => {
            if let Err(err) = grassc::write_output(path, &text) {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
        None => println!("{text}"),
    }
}
