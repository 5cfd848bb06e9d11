//! The evaluation engine.
//!
//! # Model
//!
//! The machine keeps one stack that only grows. It is seeded with
//! `in`, a character, `suc`, and `out` at slots 0 through 3. Program
//! entries run in order: a closure entry pushes itself, and a top-level
//! application pushes its result. After the last entry the machine applies
//! the top slot to itself.
//!
//! A closure at slot `p` sees the stack below `p` followed by its own
//! locals (arguments, then one result per body application). An operand
//! with distance `d` reads the `d`-th value from the end of that view.
//!
//! # Frames
//!
//! Closure calls do not recurse on the native stack. Each running closure
//! has a `Frame` on an explicit frame stack, so call depth is bounded by
//! [`MachineConfig::max_depth`] rather than by native stack size. A call in
//! the last position of a body replaces the caller's frame.

use grass_ir::{Application, Entry, Program};
use smallvec::SmallVec;
use std::rc::Rc;
use tracing::{debug, trace};

use crate::error::{EvalError, EvalResult};
use crate::input::InputSource;
use crate::output::OutputSink;
use crate::primitive;
use crate::value::{Callee, Church, Func, Partial, Primitive, Value};

/// Default limit on live closure frames.
pub const DEFAULT_MAX_DEPTH: usize = 100_000;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MachineConfig {
    /// Most closure frames alive at once.
    pub max_depth: usize,
    /// Character seeded in slot 1.
    pub initial_char: u8,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            initial_char: 0,
        }
    }
}

/// A program entry, with closure bodies moved out to the machine.
#[derive(Copy, Clone, Debug)]
enum Instr {
    Define { body: usize, arity: u32 },
    Apply(Application),
}

/// A running closure.
#[derive(Debug)]
struct Frame {
    func: Func,
    /// Arguments followed by one result per finished application.
    locals: Vec<Value>,
    /// Next application to run.
    pc: usize,
}

/// Outcome of applying a value to an argument.
enum Flow {
    /// The application produced a value without running a body.
    Done(Value),
    /// A closure received its last argument and must run.
    Enter(Func, Vec<Value>),
}

pub struct Machine {
    bodies: Vec<Vec<Application>>,
    instrs: Vec<Instr>,
    next: usize,
    stack: Vec<Value>,
    frames: Vec<Frame>,
    config: MachineConfig,
    input: InputSource,
    output: OutputSink,
}

impl Machine {
    pub fn new(
        program: &Program,
        config: MachineConfig,
        input: InputSource,
        output: OutputSink,
    ) -> Self {
        let mut bodies = Vec::with_capacity(program.closure_count());
        let mut instrs = Vec::with_capacity(program.len());
        for entry in program {
            match entry {
                Entry::Closure(closure) => {
                    instrs.push(Instr::Define {
                        body: bodies.len(),
                        arity: closure.arity,
                    });
                    bodies.push(closure.applications.clone());
                }
                Entry::Apply(application) => instrs.push(Instr::Apply(*application)),
            }
        }

        let stack = vec![
            Value::Primitive(Primitive::In),
            Value::Char(config.initial_char),
            Value::Primitive(Primitive::Succ),
            Value::Primitive(Primitive::Out),
        ];

        Machine {
            bodies,
            instrs,
            next: 0,
            stack,
            frames: Vec::new(),
            config,
            input,
            output,
        }
    }

    /// The global stack, seeded slots included.
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    /// Program entries not yet run.
    pub fn remaining(&self) -> usize {
        self.instrs.len() - self.next
    }

    /// Run the next program entry. Returns `false` once every entry has run.
    ///
    /// Entries are the only points where a host can pause the machine.
    pub fn step(&mut self) -> EvalResult<bool> {
        let Some(&instr) = self.instrs.get(self.next) else {
            return Ok(false);
        };
        self.next += 1;
        match instr {
            Instr::Define { body, arity } => {
                let func = Func {
                    position: self.stack.len(),
                    body,
                    arity: arity.max(1),
                };
                trace!(position = func.position, arity, "define");
                self.stack.push(Value::Closure(func));
            }
            Instr::Apply(application) => {
                let func = self.global(application.func.distance())?;
                let arg = self.global(application.arg.distance())?;
                let result = self.call(func, arg)?;
                trace!(position = self.stack.len(), %result, "top-level result");
                self.stack.push(result);
            }
        }
        Ok(true)
    }

    /// Run the remaining entries and the final self-application, returning
    /// its result. Output is flushed even when evaluation fails; an
    /// evaluation error wins over a failed flush.
    pub fn run(&mut self) -> EvalResult<Value> {
        debug!(entries = self.remaining(), "running program");
        let result = self.run_to_end();
        let flushed = self.output.flush();
        let value = settle(result, flushed)?;
        debug!(slots = self.stack.len(), %value, "program finished");
        Ok(value)
    }

    fn run_to_end(&mut self) -> EvalResult<Value> {
        while self.step()? {}
        let main = self.global(1)?;
        self.call(main.clone(), main)
    }

    /// Apply `func` to `arg`, running closures to completion.
    ///
    /// On error the frames this call opened are discarded, so the machine
    /// can keep stepping.
    fn call(&mut self, func: Value, arg: Value) -> EvalResult<Value> {
        let base = self.frames.len();
        let result = self.call_from(base, func, arg);
        if result.is_err() {
            self.frames.truncate(base);
        }
        result
    }

    fn call_from(&mut self, base: usize, func: Value, arg: Value) -> EvalResult<Value> {
        match self.apply(func, arg)? {
            Flow::Done(value) => Ok(value),
            Flow::Enter(callee, locals) => {
                self.push_frame(callee, locals)?;
                self.drive(base)
            }
        }
    }

    /// Run frames until the stack of frames is back to `base`.
    fn drive(&mut self, base: usize) -> EvalResult<Value> {
        loop {
            let top = self.frames.len() - 1;
            let frame = &self.frames[top];
            let body = &self.bodies[frame.func.body];

            let Some(&application) = body.get(frame.pc) else {
                // A body returns its last local; with no locals that is the
                // slot just below the closure.
                let result = self.local(frame, 1)?;
                self.frames.pop();
                trace!(depth = self.frames.len(), %result, "return");
                if self.frames.len() == base {
                    return Ok(result);
                }
                let caller = self.frames.len() - 1;
                self.frames[caller].locals.push(result);
                continue;
            };

            let func = self.local(frame, application.func.distance())?;
            let arg = self.local(frame, application.arg.distance())?;
            let tail = frame.pc + 1 == body.len();
            self.frames[top].pc += 1;

            match self.apply(func, arg)? {
                Flow::Done(value) => self.frames[top].locals.push(value),
                Flow::Enter(callee, locals) if tail => {
                    trace!(position = callee.position, "tail call");
                    self.frames[top] = Frame {
                        func: callee,
                        locals,
                        pc: 0,
                    };
                }
                Flow::Enter(callee, locals) => self.push_frame(callee, locals)?,
            }
        }
    }

    fn push_frame(&mut self, func: Func, locals: Vec<Value>) -> EvalResult<()> {
        if self.frames.len() >= self.config.max_depth {
            return Err(EvalError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        trace!(position = func.position, depth = self.frames.len() + 1, "enter");
        self.frames.push(Frame {
            func,
            locals,
            pc: 0,
        });
        Ok(())
    }

    fn apply(&mut self, func: Value, arg: Value) -> EvalResult<Flow> {
        let value = match func {
            Value::Primitive(p) => primitive::apply(p, arg, &mut self.input, &mut self.output)?,
            Value::Char(c) => Value::Church(Church::from(arg.as_char() == Some(c))),
            Value::Closure(func) => return Ok(feed(Callee::Func(func), SmallVec::new(), arg)),
            Value::Church(church) => {
                return Ok(feed(Callee::Church(church), SmallVec::new(), arg));
            }
            Value::Partial(partial) => {
                let mut partial = Rc::unwrap_or_clone(partial);
                let args = std::mem::take(&mut partial.args);
                return Ok(feed(partial.callee, args, arg));
            }
        };
        Ok(Flow::Done(value))
    }

    /// Value at `distance` from the top of the global stack.
    fn global(&self, distance: u32) -> EvalResult<Value> {
        self.stack
            .len()
            .checked_sub(distance as usize)
            .and_then(|index| self.stack.get(index))
            .cloned()
            .ok_or(EvalError::AddressError { distance })
    }

    /// Value at `distance` from the end of `frame`'s view.
    fn local(&self, frame: &Frame, distance: u32) -> EvalResult<Value> {
        let d = distance as usize;
        let len = frame.locals.len();
        if d <= len {
            return Ok(frame.locals[len - d].clone());
        }
        (frame.func.position + len)
            .checked_sub(d)
            .and_then(|index| self.stack.get(index))
            .cloned()
            .ok_or(EvalError::AddressError { distance })
    }
}

/// Combine an evaluation result with the final flush, keeping the
/// evaluation error if both failed.
fn settle(result: EvalResult<Value>, flushed: std::io::Result<()>) -> EvalResult<Value> {
    let value = result?;
    flushed?;
    Ok(value)
}

/// Give `callee` one more argument.
fn feed(callee: Callee, mut args: SmallVec<[Value; 4]>, arg: Value) -> Flow {
    args.push(arg);
    if args.len() < callee.arity() as usize {
        return Flow::Done(Value::Partial(Rc::new(Partial { callee, args })));
    }
    match callee {
        Callee::Func(func) => Flow::Enter(func, args.into_vec()),
        // Church booleans take exactly two arguments.
        Callee::Church(Church::True) => Flow::Done(args.swap_remove(0)),
        Callee::Church(Church::False) => Flow::Done(args.swap_remove(1)),
    }
}

#[cfg(test)]
mod tests;
