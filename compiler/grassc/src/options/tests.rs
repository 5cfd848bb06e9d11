#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn run_defaults() {
    let options = RunOptions::parse(&args(&["hello.lawn"])).unwrap();
    assert_eq!(options.file, PathBuf::from("hello.lawn"));
    assert_eq!(options.dialect(), Dialect::Lawn);
    assert_eq!(options.output_mode, OutputMode::Bytes);
    assert_eq!(options.config, MachineConfig::default());
}

#[test]
fn run_flags() {
    let options = RunOptions::parse(&args(&[
        "--numeric",
        "prog.txt",
        "--dialect=grass",
        "--max-depth=50",
        "--seed-char=119",
    ]))
    .unwrap();
    assert_eq!(options.dialect(), Dialect::Grass);
    assert_eq!(options.output_mode, OutputMode::Numeric);
    assert_eq!(options.config.max_depth, 50);
    assert_eq!(options.config.initial_char, b'w');
}

#[test]
fn seed_char_accepts_a_letter() {
    let options = RunOptions::parse(&args(&["a.grass", "--seed-char=w"])).unwrap();
    assert_eq!(options.config.initial_char, b'w');
    assert_eq!(options.dialect(), Dialect::Grass);
}

#[test]
fn run_errors() {
    assert_eq!(RunOptions::parse(&[]), Err(OptionError::MissingFile));
    assert_eq!(
        RunOptions::parse(&args(&["a", "--fast"])),
        Err(OptionError::Unknown("--fast".into()))
    );
    assert_eq!(
        RunOptions::parse(&args(&["a", "b"])),
        Err(OptionError::UnexpectedArgument("b".into()))
    );
    assert_eq!(
        RunOptions::parse(&args(&["a", "--max-depth=0"])),
        Err(OptionError::InvalidValue {
            flag: "--max-depth",
            value: "0".into()
        })
    );
    assert_eq!(
        RunOptions::parse(&args(&["a", "--seed-char=256"])),
        Err(OptionError::InvalidValue {
            flag: "--seed-char",
            value: "256".into()
        })
    );
    assert_eq!(
        RunOptions::parse(&args(&["a", "--dialect=turf"])),
        Err(OptionError::InvalidValue {
            flag: "--dialect",
            value: "turf".into()
        })
    );
}

#[test]
fn transcode_options() {
    let options =
        TranscodeOptions::parse(&args(&["in.lawn", "-o", "out.grass", "--width=80"])).unwrap();
    assert_eq!(options.file, PathBuf::from("in.lawn"));
    assert_eq!(options.output, Some(PathBuf::from("out.grass")));
    assert_eq!(options.width, 80);

    assert_eq!(
        TranscodeOptions::parse(&args(&["in.lawn", "-o"])),
        Err(OptionError::MissingValue("-o"))
    );
}

#[test]
fn inspect_args() {
    assert_eq!(
        parse_inspect_args(&args(&["x.w"])).unwrap(),
        (PathBuf::from("x.w"), Dialect::Grass)
    );
    assert_eq!(
        parse_inspect_args(&args(&["x.w", "--dialect=lawn"])).unwrap(),
        (PathBuf::from("x.w"), Dialect::Lawn)
    );
}
