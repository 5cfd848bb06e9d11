//! Grass interpreter CLI.

mod commands;

use commands::{explain_error, lex_file, parse_file, run_file, transcode_file};
use grassc::options::{parse_inspect_args, OptionError, RunOptions, TranscodeOptions};

fn main() {
    grassc::logging::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let options = RunOptions::parse(&args[2..]).unwrap_or_else(|err| {
                usage_error(
                    &err,
                    "grass run <file> [--dialect=grass|lawn] [--numeric] [--max-depth=N] [--seed-char=N]",
                )
            });
            run_file(&options);
        }
        "transcode" => {
            let options = TranscodeOptions::parse(&args[2..]).unwrap_or_else(|err| {
                usage_error(&err, "grass transcode <file.lawn> [-o <out.grass>] [--width=N]")
            });
            transcode_file(&options);
        }
        "lex" => {
            let (path, dialect) = parse_inspect_args(&args[2..])
                .unwrap_or_else(|err| usage_error(&err, "grass lex <file> [--dialect=grass|lawn]"));
            lex_file(&path, dialect);
        }
        "parse" => {
            let (path, dialect) = parse_inspect_args(&args[2..]).unwrap_or_else(|err| {
                usage_error(&err, "grass parse <file> [--dialect=grass|lawn]")
            });
            parse_file(&path, dialect);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: grass --explain <ERROR_CODE>");
                eprintln!("Example: grass --explain E1004");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("grass {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            if is_program_path(command) {
                match RunOptions::parse(&args[1..]) {
                    Ok(options) => run_file(&options),
                    Err(err) => usage_error(&err, "grass <file.grass|file.lawn> [run options]"),
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn is_program_path(arg: &str) -> bool {
    [".grass", ".lawn", ".w"]
        .iter()
        .any(|ext| arg.to_ascii_lowercase().ends_with(ext))
}

fn usage_error(err: &OptionError, usage: &str) -> ! {
    eprintln!("error: {err}");
    eprintln!("Usage: {usage}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Grass interpreter");
    println!();
    println!("Usage: grass <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>         Run a Grass or Lawn program");
    println!("  transcode <file>   Translate a program to Grass syntax");
    println!("  lex <file>         Show the token stream (debug)");
    println!("  parse <file>       Show the resolved program (debug)");
    println!("  --explain <code>   Explain an error code");
    println!("  help               Show this message");
    println!("  version            Show version information");
    println!();
    println!("Run options:");
    println!("  --dialect=<d>      Force grass or lawn (default: from extension)");
    println!("  --numeric          Print output bytes as code(char)");
    println!("  --max-depth=<n>    Limit on live closure frames (default: 100000)");
    println!("  --seed-char=<c>    Initial character, a code or a letter (default: 0)");
    println!();
    println!("Transcode options:");
    println!("  -o <path>          Write to a file instead of stdout");
    println!("  --width=<n>        Wrap lines at n columns");
    println!();
    println!("Shorthand:");
    println!("  grass <file.grass|file.lawn>   Same as 'grass run <file>'");
    println!();
    println!("Set RUST_LOG to enable tracing; GRASS_LOG_TREE=1 shows it as a tree.");
}
