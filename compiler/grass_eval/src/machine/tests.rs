#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::output::BufferOutput;
use grass_lexer::Dialect;
use pretty_assertions::assert_eq;

fn load(source: &str, dialect: Dialect, config: MachineConfig) -> (Machine, BufferOutput) {
    let program = grass_parse::parse(source, dialect).unwrap();
    let buffer = BufferOutput::new();
    let machine = Machine::new(
        &program,
        config,
        InputSource::Empty,
        OutputSink::Buffer(buffer.clone()),
    );
    (machine, buffer)
}

fn output_of(source: &str) -> Vec<u8> {
    let (mut machine, buffer) = load(source, Dialect::Lawn, MachineConfig::default());
    machine.run().unwrap();
    buffer.contents()
}

fn error_of(source: &str, config: MachineConfig) -> EvalError {
    let (mut machine, _) = load(source, Dialect::Lawn, config);
    machine.run().unwrap_err()
}

#[test]
fn stack_is_seeded() {
    let (machine, _) = load("1 [ ]", Dialect::Lawn, MachineConfig::default());
    assert_eq!(
        machine.stack(),
        &[
            Value::Primitive(Primitive::In),
            Value::Char(0),
            Value::Primitive(Primitive::Succ),
            Value::Primitive(Primitive::Out),
        ]
    );
}

#[test]
fn increments_and_prints_zero() {
    let (mut machine, buffer) = load("wvWWWwwwwWWWw", Dialect::Grass, MachineConfig::default());
    let result = machine.run().unwrap();
    assert_eq!(buffer.contents(), vec![1]);
    // The final self-application compares the character with itself.
    assert_eq!(result, Value::Church(Church::True));
}

#[test]
fn grass_programs_with_w_seed() {
    let config = MachineConfig {
        initial_char: b'w',
        ..MachineConfig::default()
    };
    for (source, expected) in [
        ("wWWwwww", "w"),
        ("wWWWwwwwWWWw", "x"),
        (
            "wwWWwv wwwwWWWwwWwwWWWWWWwwwwWwwv wWWwwwWwwwwWwwwwwwWwwwwwwwww",
            "ww",
        ),
    ] {
        let (mut machine, buffer) = load(source, Dialect::Grass, config);
        machine.run().unwrap();
        assert_eq!(buffer.contents_lossy(), expected, "{source}");
    }
}

#[test]
fn equal_characters_select_first() {
    assert_eq!(output_of("1 [ ] 0 0 : t t out ' suc ' 0 out '"), vec![0, 0]);
}

#[test]
fn unequal_characters_select_second() {
    assert_eq!(
        output_of("1 [ ] suc 0 : one 0 one ' out ' suc ' 0 out '"),
        vec![1]
    );
}

#[test]
fn exhausted_input_echoes_fallback() {
    assert_eq!(output_of("1 [ ] suc 0 in ' out '"), vec![1]);
}

#[test]
fn input_bytes_are_read() {
    let program = grass_parse::parse("1 [ ] suc 0 in ' out '", Dialect::Lawn).unwrap();
    let buffer = BufferOutput::new();
    let mut machine = Machine::new(
        &program,
        MachineConfig::default(),
        InputSource::buffer("A"),
        OutputSink::Buffer(buffer.clone()),
    );
    machine.run().unwrap();
    assert_eq!(buffer.contents(), b"A".to_vec());
}

#[test]
fn partial_application_waits_for_all_arguments() {
    let (mut machine, buffer) = load(
        "2 [ out .2 ] : k suc 0 : one k 0 ' one",
        Dialect::Lawn,
        MachineConfig::default(),
    );
    // Define, `suc 0`, `k 0`.
    for _ in 0..3 {
        assert!(machine.step().unwrap());
    }
    assert!(matches!(machine.stack().last(), Some(Value::Partial(_))));
    assert!(buffer.contents().is_empty());

    assert!(machine.step().unwrap());
    assert_eq!(buffer.contents(), vec![1]);
    assert!(!machine.step().unwrap());
    assert_eq!(machine.remaining(), 0);
}

#[test]
fn tail_calls_reuse_frames() {
    let config = MachineConfig {
        max_depth: 1,
        ..MachineConfig::default()
    };
    let (mut machine, buffer) = load(
        "1 [ out .1 ] : p 1 [ p .1 ] : q 1 [ q .1 ] : r r w",
        Dialect::Lawn,
        config,
    );
    machine.run().unwrap();
    assert_eq!(buffer.contents(), vec![0]);
}

#[test]
fn non_tail_recursion_hits_depth_limit() {
    let config = MachineConfig {
        max_depth: 64,
        ..MachineConfig::default()
    };
    let err = error_of("1 [ .1 .1 .1 .1 ]", config);
    assert!(matches!(err, EvalError::DepthExceeded { limit: 64 }));
}

#[test]
fn out_of_range_operands() {
    let err = error_of("1 [ '10 ' ]", MachineConfig::default());
    assert!(matches!(err, EvalError::AddressError { distance: 10 }));

    let err = error_of("1 [ ] '9 '", MachineConfig::default());
    assert!(matches!(err, EvalError::AddressError { distance: 9 }));
}

#[test]
fn output_of_a_primitive_is_a_type_error() {
    let err = error_of("1 [ ] out out", MachineConfig::default());
    assert!(matches!(
        err,
        EvalError::TypeError {
            primitive: Primitive::Out,
            found: "primitive"
        }
    ));
}

#[test]
fn output_before_an_error_is_kept() {
    let (mut machine, buffer) = load(
        "1 [ ] suc 0 out ' out out",
        Dialect::Lawn,
        MachineConfig::default(),
    );
    assert!(machine.run().is_err());
    assert_eq!(buffer.contents(), vec![1]);
}

#[test]
fn empty_body_returns_its_argument() {
    let (mut machine, buffer) = load("1 [ ] : id id 0 out '", Dialect::Lawn, MachineConfig::default());
    machine.run().unwrap();
    assert_eq!(buffer.contents(), vec![0]);
}

#[test]
fn failed_call_leaves_no_frames_behind() {
    let (mut machine, _) = load("1 [ out .1 ] : p p out", Dialect::Lawn, MachineConfig::default());
    assert!(machine.step().unwrap());
    let err = machine.step().unwrap_err();
    assert!(matches!(err, EvalError::TypeError { .. }));
    assert!(machine.frames.is_empty());
    assert_eq!(machine.stack().len(), 5);
    assert!(!machine.step().unwrap());
}

#[test]
fn depth_error_unwinds_every_frame() {
    let config = MachineConfig {
        max_depth: 16,
        ..MachineConfig::default()
    };
    let (mut machine, _) = load("1 [ .1 .1 .1 .1 ] : m m m", Dialect::Lawn, config);
    assert!(machine.step().unwrap());
    let err = machine.step().unwrap_err();
    assert!(matches!(err, EvalError::DepthExceeded { limit: 16 }));
    assert!(machine.frames.is_empty());
}

#[test]
fn evaluation_error_wins_over_flush_error() {
    let broken = || Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe));

    let err = settle(Err(EvalError::DepthExceeded { limit: 1 }), broken()).unwrap_err();
    assert!(matches!(err, EvalError::DepthExceeded { limit: 1 }));

    let err = settle(Ok(Value::Char(1)), broken()).unwrap_err();
    assert!(matches!(err, EvalError::Io(_)));

    assert_eq!(settle(Ok(Value::Char(1)), Ok(())).unwrap(), Value::Char(1));
}
