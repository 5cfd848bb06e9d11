//! Debug commands: `lex` and `parse` for inspecting the front end.

use grassc::Dialect;
use std::path::Path;

use super::{fail, read_file};

/// Lex a file and display the token stream.
pub fn lex_file(path: &Path, dialect: Dialect) {
    let content = read_file(path);
    let tokens = grass_lexer::lex(&content, dialect);

    println!(
        "Tokens for '{}' ({dialect}, {} tokens):",
        path.display(),
        tokens.len()
    );
    for token in &tokens {
        println!("  {:?} @ {} {:?}", token.kind, token.span, token.text(&content));
    }
}

/// Parse a file and display the resolved program.
pub fn parse_file(path: &Path, dialect: Dialect) {
    let content = read_file(path);
    let program = match grassc::parse_source(&content, dialect) {
        Ok(program) => program,
        Err(err) => fail(&err, &content, path),
    };

    println!("Parse result for '{}' ({dialect}):", path.display());
    println!("  Closures: {}", program.closure_count());
    println!("  Applications: {}", program.application_count());
    println!();
    print!("{program}");
}
