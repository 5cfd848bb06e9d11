//! The three built-in functions.

use crate::error::{EvalError, EvalResult};
use crate::input::InputSource;
use crate::output::OutputSink;
use crate::value::{Primitive, Value};

fn expect_char(primitive: Primitive, arg: &Value) -> EvalResult<u8> {
    arg.as_char().ok_or(EvalError::TypeError {
        primitive,
        found: arg.kind_name(),
    })
}

/// `(c + 1) mod 256`.
pub fn succ(arg: &Value) -> EvalResult<Value> {
    let c = expect_char(Primitive::Succ, arg)?;
    Ok(Value::Char(c.wrapping_add(1)))
}

/// Write `arg` and return it.
pub fn out(arg: Value, output: &mut OutputSink) -> EvalResult<Value> {
    let c = expect_char(Primitive::Out, &arg)?;
    output.write_byte(c)?;
    Ok(arg)
}

/// Read one byte; return `arg` itself once input is exhausted.
pub fn input(arg: Value, input: &mut InputSource, output: &mut OutputSink) -> EvalResult<Value> {
    // Make prompts visible before blocking on a read.
    output.flush()?;
    Ok(match input.read_byte()? {
        Some(byte) => Value::Char(byte),
        None => arg,
    })
}

/// Apply `primitive` to `arg`.
pub fn apply(
    primitive: Primitive,
    arg: Value,
    source: &mut InputSource,
    sink: &mut OutputSink,
) -> EvalResult<Value> {
    match primitive {
        Primitive::In => input(arg, source, sink),
        Primitive::Succ => succ(&arg),
        Primitive::Out => out(arg, sink),
    }
}
