//! Grass Formatter
//!
//! Renders a resolved [`Program`] as Grass text, the transcoding direction
//! for programs written in Lawn.
//!
//! Each closure is written as its arity in `w` followed by its applications
//! as `W`-run/`w`-run pairs, and is closed by a `v`. Top-level applications
//! are bare pairs. The output parses back to the same program:
//!
//! ```
//! use grass_lexer::Dialect;
//!
//! let program = grass_parse::parse("1 [ ] suc 0 out '", Dialect::Lawn).unwrap();
//! let grass = grass_fmt::render(&program);
//! assert_eq!(grass, "wvWWWwwwwWWWw");
//! assert_eq!(grass_parse::parse(&grass, Dialect::Grass).unwrap(), program);
//! ```

mod writer;

pub use writer::{GrassWriter, LOWER, SEPARATOR, UPPER};

use grass_ir::{Application, Entry, Program};

/// Render `program` on a single line.
pub fn render(program: &Program) -> String {
    render_with(program, GrassWriter::new())
}

/// Render `program`, breaking lines every `width` characters. The Grass
/// scanner ignores the line breaks. A width of zero disables wrapping.
pub fn render_wrapped(program: &Program, width: usize) -> String {
    render_with(program, GrassWriter::with_width(width))
}

fn render_with(program: &Program, mut writer: GrassWriter) -> String {
    for entry in program {
        match entry {
            Entry::Closure(closure) => {
                writer.separate();
                writer.run(LOWER, closure.arity);
                for application in &closure.applications {
                    pair(&mut writer, *application);
                }
                writer.run(SEPARATOR, 1);
            }
            Entry::Apply(application) => pair(&mut writer, *application),
        }
    }
    writer.finish()
}

fn pair(writer: &mut GrassWriter, application: Application) {
    writer.run(UPPER, application.func.distance());
    writer.run(LOWER, application.arg.distance());
}
