//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the destination is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Source context attached to an emitter so labels can show snippets.
struct SourceContext {
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
    file_path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the program text so labels resolve to line:column and snippets.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(SourceContext {
            text: source.to_string(),
            lines: LineOffsetTable::build(source),
        });
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, path: &str) -> Self {
        self.file_path = Some(path.to_string());
        self
    }

    /// Consume the emitter and return the writer (used by tests).
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self) {
        self.write_colored("error", colors::ERROR);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_label(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let location = self.location(label);
        let _ = write!(self.writer, "  {marker} {location}: ");
        if label.is_primary {
            self.write_colored(&label.message, colors::ERROR);
        } else {
            self.write_colored(&label.message, colors::SECONDARY);
        }
        let _ = writeln!(self.writer);
        self.write_snippet(label);
    }

    /// `path:line:col` when source is attached, otherwise the raw span.
    fn location(&self, label: &Label) -> String {
        let path = self.file_path.as_deref().unwrap_or("<input>");
        match &self.source {
            Some(ctx) => {
                let (line, col) = ctx.lines.offset_to_line_col(&ctx.text, label.span.start);
                format!("{path}:{line}:{col}")
            }
            None => format!("{path}@{}", label.span),
        }
    }

    /// Print the source line containing the label with carets beneath it.
    fn write_snippet(&mut self, label: &Label) {
        let Some(ctx) = &self.source else {
            return;
        };
        let (line, col) = ctx.lines.offset_to_line_col(&ctx.text, label.span.start);
        let Some(line_text) = ctx.text.lines().nth((line - 1) as usize) else {
            return;
        };
        let width = ctx
            .text
            .get(label.span.to_range())
            .map_or(1, |s| s.chars().count().max(1));
        let line_text = line_text.to_string();
        let gutter = line.to_string().len();
        let pad = " ".repeat(gutter);
        let carets = format!(
            "{}{}",
            " ".repeat((col - 1) as usize),
            "^".repeat(width)
        );

        let _ = writeln!(self.writer, "  {pad} |");
        let _ = writeln!(self.writer, "  {line} | {line_text}");
        let _ = write!(self.writer, "  {pad} | ");
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        self.write_colored(&carets, color);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: Kind: message
        self.write_severity();
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(
            self.writer,
            ": {}: {}",
            diagnostic.code.kind_name(),
            diagnostic.message
        );

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Emitter writing to stderr with color decided by TTY detection.
pub fn stderr_emitter(mode: ColorMode) -> TerminalEmitter<io::Stderr> {
    let is_tty = io::IsTerminal::is_terminal(&io::stderr());
    TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
}

#[cfg(test)]
mod tests;
