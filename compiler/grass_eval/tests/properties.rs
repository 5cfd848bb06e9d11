//! Property tests for the engine, run through the parser.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use grass_eval::{BufferOutput, InputSource, Machine, MachineConfig, OutputSink};
use grass_lexer::Dialect;
use proptest::prelude::*;

/// Lawn program that applies `suc` to the zero character `n` times and
/// prints the result. `n` must be at least 1.
fn successor_chain(n: usize) -> String {
    let mut source = String::from("1 [ ] suc 0 ");
    for _ in 1..n {
        source.push_str("suc ' ");
    }
    source.push_str("out '");
    source
}

fn run_lawn(source: &str, input: &[u8]) -> Vec<u8> {
    let program = grass_parse::parse(source, Dialect::Lawn).unwrap();
    let buffer = BufferOutput::new();
    let mut machine = Machine::new(
        &program,
        MachineConfig::default(),
        InputSource::buffer(input),
        OutputSink::Buffer(buffer.clone()),
    );
    machine.run().unwrap();
    buffer.contents()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn successor_wraps_at_256(n in 1usize..600) {
        let output = run_lawn(&successor_chain(n), b"");
        prop_assert_eq!(output, vec![(n % 256) as u8]);
    }

    #[test]
    fn input_byte_is_echoed(byte: u8) {
        let output = run_lawn("1 [ ] suc 0 in ' out '", &[byte]);
        prop_assert_eq!(output, vec![byte]);
    }
}
