//! End-to-end runs through the driver facade.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use grassc::{
    run_source, transcode_source, BufferOutput, Dialect, ErrorCode, InputSource, MachineConfig,
    OutputMode, OutputSink,
};
use pretty_assertions::assert_eq;

fn seeded(initial_char: u8) -> MachineConfig {
    MachineConfig {
        initial_char,
        ..MachineConfig::default()
    }
}

/// Run with an empty input and return what was written.
fn output_of(source: &str, dialect: Dialect, config: MachineConfig) -> Vec<u8> {
    let buffer = BufferOutput::new();
    run_source(
        source,
        dialect,
        config,
        InputSource::Empty,
        OutputSink::Buffer(buffer.clone()),
    )
    .unwrap();
    buffer.contents()
}

#[test]
fn increment_and_print_writes_byte_one() {
    let expected: Vec<u8> = vec![1];
    assert_eq!(
        output_of("wvWWWwwwwWWWw", Dialect::Grass, MachineConfig::default()),
        expected
    );
    assert_eq!(
        output_of("1 [ ] suc 0 out '", Dialect::Lawn, MachineConfig::default()),
        expected
    );
}

#[test]
fn lawn_programs() {
    let cases: [(&str, &[u8]); 5] = [
        ("1 [ ] 0 0 : t t out ' suc ' 0 out '", &[0, 0]),
        ("1 [ ] suc 0 : one 0 one ' out ' suc ' 0 out '", &[1]),
        ("1 [ ] suc 0 in ' out '", &[1]),
        ("2 [ out .2 ] : k suc 0 : one k 0 ' one", &[1]),
        ("1 [ out .1 ] : p 1 [ p .1 ] : q 1 [ q .1 ] : r r w", &[0]),
    ];
    for (source, expected) in cases {
        assert_eq!(
            output_of(source, Dialect::Lawn, MachineConfig::default()),
            expected.to_vec(),
            "{source}"
        );
    }
}

#[test]
fn grass_programs_with_w_seed() {
    let cases = [
        ("wWWwwww", "w"),
        (
            "wwWWwv wwwwWWWwwWwwWWWWWWwwwwWwwv wWWwwwWwwwwWwwwwwwWwwwwwwwww",
            "ww",
        ),
        ("wWWWwwwwWWWw", "x"),
    ];
    for (source, expected) in cases {
        let bytes = output_of(source, Dialect::Grass, seeded(b'w'));
        assert_eq!(String::from_utf8(bytes).unwrap(), expected, "{source}");
    }
}

#[test]
fn input_is_echoed() {
    let buffer = BufferOutput::new();
    run_source(
        "1 [ ] suc 0 in ' out '",
        Dialect::Lawn,
        MachineConfig::default(),
        InputSource::buffer(*b"A"),
        OutputSink::Buffer(buffer.clone()),
    )
    .unwrap();
    assert_eq!(buffer.contents_lossy(), "A");
}

#[test]
fn numeric_output() {
    let buffer = BufferOutput::with_mode(OutputMode::Numeric);
    run_source(
        "wvWWWwwwwWWWw",
        Dialect::Grass,
        seeded(b'w'),
        InputSource::Empty,
        OutputSink::Buffer(buffer.clone()),
    )
    .unwrap();
    assert_eq!(buffer.contents_lossy(), "120(x)");
}

#[test]
fn lone_close_bracket_writes_nothing() {
    let buffer = BufferOutput::new();
    let err = run_source(
        "]",
        Dialect::Lawn,
        MachineConfig::default(),
        InputSource::Empty,
        OutputSink::Buffer(buffer.clone()),
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(err.to_diagnostic().code.kind_name(), "SyntaxError");
    assert!(buffer.contents().is_empty());
}

#[test]
fn name_goes_out_of_scope_with_its_definition() {
    let program = grassc::parse_source("1 [ .1 .1 : x x x ]", Dialect::Lawn).unwrap();
    assert_eq!(program.to_string(), "   0: closure/1 [(1 1) (1 1)]\n");

    let err = grassc::parse_source("1 [ .1 .1 : x x x ] 1 [ x .1 ]", Dialect::Lawn).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1004);
}

#[test]
fn output_applied_to_a_primitive_is_a_type_error() {
    let buffer = BufferOutput::new();
    let err = run_source(
        "1 [ ] out out",
        Dialect::Lawn,
        MachineConfig::default(),
        InputSource::Empty,
        OutputSink::Buffer(buffer),
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::E6001);
    assert!(!err.has_source_location());
}

#[test]
fn runaway_recursion_hits_the_depth_limit() {
    // The first self-application is not in tail position, so every level
    // keeps its frame.
    let config = MachineConfig {
        max_depth: 64,
        ..MachineConfig::default()
    };
    let err = run_source(
        "1 [ .1 .1 .1 .1 ] : m m m",
        Dialect::Lawn,
        config,
        InputSource::Empty,
        OutputSink::Silent,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::E6003);
}

#[test]
fn transcoding_lawn_gives_runnable_grass() {
    let grass = transcode_source("1 [ ] suc 0 out '", Dialect::Lawn, 0).unwrap();
    assert_eq!(grass, "wvWWWwwwwWWWw");
    assert_eq!(
        output_of(&grass, Dialect::Grass, MachineConfig::default()),
        vec![1]
    );
}

#[test]
fn long_accumulated_input_is_freed_after_the_run() {
    // Each byte read extends a chain of partial applications.
    let source = "2 [ ] : snd 1 [ ] : id \
                  2 [ in 0 : c c 0 : done snd .2 : acc2 .1 .1 : go done id : t t go : k k acc2 ] : loop \
                  loop loop : start start 0";
    let input = vec![b'a'; 300_000];
    let result = run_source(
        source,
        Dialect::Lawn,
        MachineConfig::default(),
        InputSource::buffer(input),
        OutputSink::Silent,
    )
    .unwrap();
    drop(result);
}
