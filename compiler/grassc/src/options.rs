//! Command-line options for `run` and `transcode`.
//!
//! Flags use the `--name=value` form, except `-o <path>`.

use grass_eval::{MachineConfig, OutputMode};
use grass_lexer::Dialect;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum OptionError {
    #[error("unknown option '{0}'")]
    Unknown(String),
    #[error("invalid value for {flag}: '{value}'")]
    InvalidValue { flag: &'static str, value: String },
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("missing file path")]
    MissingFile,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

fn invalid(flag: &'static str, value: &str) -> OptionError {
    OptionError::InvalidValue {
        flag,
        value: value.to_owned(),
    }
}

/// Options for `grass run`.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct RunOptions {
    pub file: PathBuf,
    /// Forced dialect; `None` guesses from the extension.
    pub dialect: Option<Dialect>,
    pub output_mode: OutputMode,
    pub config: MachineConfig,
}

impl RunOptions {
    /// Parse the arguments after `run`.
    pub fn parse(args: &[String]) -> Result<Self, OptionError> {
        let mut options = RunOptions::default();
        let mut file = None;
        for arg in args {
            if let Some(value) = arg.strip_prefix("--dialect=") {
                options.dialect = Some(parse_dialect(value)?);
            } else if arg == "--numeric" {
                options.output_mode = OutputMode::Numeric;
            } else if let Some(value) = arg.strip_prefix("--max-depth=") {
                options.config.max_depth = value
                    .parse()
                    .ok()
                    .filter(|&depth| depth > 0)
                    .ok_or_else(|| invalid("--max-depth", value))?;
            } else if let Some(value) = arg.strip_prefix("--seed-char=") {
                options.config.initial_char = parse_char(value)?;
            } else if arg.starts_with('-') {
                return Err(OptionError::Unknown(arg.clone()));
            } else if file.is_none() {
                file = Some(PathBuf::from(arg));
            } else {
                return Err(OptionError::UnexpectedArgument(arg.clone()));
            }
        }
        options.file = file.ok_or(OptionError::MissingFile)?;
        Ok(options)
    }

    pub fn dialect(&self) -> Dialect {
        dialect_for(&self.file, self.dialect)
    }
}

/// Options for `grass transcode`.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct TranscodeOptions {
    pub file: PathBuf,
    /// Write here instead of stdout.
    pub output: Option<PathBuf>,
    /// Line width; zero keeps everything on one line.
    pub width: usize,
}

impl TranscodeOptions {
    /// Parse the arguments after `transcode`.
    pub fn parse(args: &[String]) -> Result<Self, OptionError> {
        let mut options = TranscodeOptions::default();
        let mut file = None;
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            if arg == "-o" {
                let path = args.next().ok_or(OptionError::MissingValue("-o"))?;
                options.output = Some(PathBuf::from(path));
            } else if let Some(value) = arg.strip_prefix("--width=") {
                options.width = value.parse().map_err(|_| invalid("--width", value))?;
            } else if arg.starts_with('-') {
                return Err(OptionError::Unknown(arg.clone()));
            } else if file.is_none() {
                file = Some(PathBuf::from(arg));
            } else {
                return Err(OptionError::UnexpectedArgument(arg.clone()));
            }
        }
        options.file = file.ok_or(OptionError::MissingFile)?;
        Ok(options)
    }
}

/// Parse the arguments of `lex` and `parse`: a file and an optional
/// `--dialect=`.
pub fn parse_inspect_args(args: &[String]) -> Result<(PathBuf, Dialect), OptionError> {
    let mut dialect = None;
    let mut file = None;
    for arg in args {
        if let Some(value) = arg.strip_prefix("--dialect=") {
            dialect = Some(parse_dialect(value)?);
        } else if arg.starts_with('-') {
            return Err(OptionError::Unknown(arg.clone()));
        } else if file.is_none() {
            file = Some(PathBuf::from(arg));
        } else {
            return Err(OptionError::UnexpectedArgument(arg.clone()));
        }
    }
    let file = file.ok_or(OptionError::MissingFile)?;
    let dialect = dialect_for(&file, dialect);
    Ok((file, dialect))
}

fn dialect_for(path: &Path, forced: Option<Dialect>) -> Dialect {
    forced.unwrap_or_else(|| Dialect::from_path(path))
}

fn parse_dialect(value: &str) -> Result<Dialect, OptionError> {
    value.parse().map_err(|()| invalid("--dialect", value))
}

/// A decimal code `0..=255`, or a single ASCII character.
fn parse_char(value: &str) -> Result<u8, OptionError> {
    if let Ok(code) = value.parse::<u8>() {
        return Ok(code);
    }
    match value.as_bytes() {
        [byte] if byte.is_ascii() && !byte.is_ascii_digit() => Ok(*byte),
        _ => Err(invalid("--seed-char", value)),
    }
}

#[cfg(test)]
mod tests;
