//! Closure emitter: resolved segments to a flat [`Program`].

use grass_ir::{Closure, Entry, Program};

use crate::resolve::ResolvedSegment;

/// Accumulates program entries in source order.
#[derive(Default)]
pub struct Emitter {
    program: Program,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A definition becomes one closure entry; a top-level segment becomes
    /// one entry per application.
    pub fn emit(&mut self, segment: ResolvedSegment) {
        match segment.arity {
            Some(arity) => self
                .program
                .push(Entry::Closure(Closure::new(arity, segment.applications))),
            None => {
                for application in segment.applications {
                    self.program.push(Entry::Apply(application));
                }
            }
        }
    }

    pub fn finish(self) -> Program {
        self.program
    }
}
