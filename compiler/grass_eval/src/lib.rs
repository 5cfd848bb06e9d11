//! Grass Eval - stack-addressed evaluation engine.
//!
//! Executes a resolved [`Program`] against the three primitives (`in`,
//! `suc`, `out`), character comparison, and Church booleans.
//!
//! # Architecture
//!
//! - [`Value`]: closed set of runtime values, dispatched by `match`
//! - [`Machine`]: global stack plus an explicit frame stack for closures
//! - [`InputSource`] / [`OutputSink`]: enum-dispatched I/O handlers
//! - [`EvalError`]: runtime failures, each mapped to an error code

mod error;
mod input;
mod machine;
mod output;
pub mod primitive;
mod value;

pub use error::{EvalError, EvalResult};
pub use input::{BufferInput, InputSource, StdinInput};
pub use machine::{Machine, MachineConfig, DEFAULT_MAX_DEPTH};
pub use output::{BufferOutput, OutputMode, OutputSink, StdoutOutput};
pub use value::{Callee, Church, Func, Partial, Primitive, Value};

use grass_ir::Program;

/// Run `program` to completion and return the final self-application's
/// result.
pub fn run(
    program: &Program,
    config: MachineConfig,
    input: InputSource,
    output: OutputSink,
) -> EvalResult<Value> {
    Machine::new(program, config, input, output).run()
}
