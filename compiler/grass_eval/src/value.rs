//! Runtime values.
//!
//! Everything a program can hold is one of five variants. Church booleans
//! exist only as results of character comparison and are real variants,
//! not closures at magic positions.

use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;

/// The three built-in functions seeded on the stack.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Primitive {
    /// Read one byte; yield the argument when input is exhausted.
    In,
    /// Next character, wrapping at 256.
    Succ,
    /// Write a character and yield it.
    Out,
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Primitive::In => "in",
            Primitive::Succ => "suc",
            Primitive::Out => "out",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Church boolean produced by character comparison.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Church {
    /// Selects the first of two arguments.
    True,
    /// Selects the second of two arguments.
    False,
}

impl From<bool> for Church {
    fn from(value: bool) -> Self {
        if value {
            Church::True
        } else {
            Church::False
        }
    }
}

/// A closure placed on the stack.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Func {
    /// Stack index of the closure. Its captured environment is every slot
    /// below this one.
    pub position: usize,
    /// Index into the machine's closure bodies.
    pub body: usize,
    pub arity: u32,
}

/// What a partial application will eventually call.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Callee {
    Func(Func),
    Church(Church),
}

impl Callee {
    pub fn arity(self) -> u32 {
        match self {
            Callee::Func(func) => func.arity,
            Callee::Church(_) => 2,
        }
    }
}

/// A callee that has received some, but not all, of its arguments.
///
/// Programs build lists as chains of partials, so dropping one walks the
/// chain with a work list instead of recursing once per link.
#[derive(Clone, PartialEq, Debug)]
pub struct Partial {
    pub callee: Callee,
    pub args: SmallVec<[Value; 4]>,
}

impl Drop for Partial {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_partials(&mut self.args, &mut pending);
        while let Some(partial) = pending.pop() {
            // Shared links are still alive elsewhere; only the last owner
            // unpacks them.
            if let Ok(mut inner) = Rc::try_unwrap(partial) {
                take_partials(&mut inner.args, &mut pending);
            }
        }
    }
}

/// Move every nested partial out of `args` onto `pending`.
fn take_partials(args: &mut SmallVec<[Value; 4]>, pending: &mut Vec<Rc<Partial>>) {
    for value in args.drain(..) {
        if let Value::Partial(partial) = value {
            pending.push(partial);
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Primitive(Primitive),
    Char(u8),
    Closure(Func),
    Partial(Rc<Partial>),
    Church(Church),
}

impl Value {
    /// Short description of the variant, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Primitive(_) => "primitive",
            Value::Char(_) => "character",
            Value::Closure(_) => "closure",
            Value::Partial(_) => "partial application",
            Value::Church(_) => "Church boolean",
        }
    }

    pub fn as_char(&self) -> Option<u8> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Primitive(p) => write!(f, "{p}"),
            Value::Char(c) => write!(f, "char({c})"),
            Value::Closure(func) => write!(f, "closure@{}/{}", func.position, func.arity),
            Value::Partial(partial) => {
                let callee = match partial.callee {
                    Callee::Func(func) => format!("closure@{}", func.position),
                    Callee::Church(church) => format!("{church:?}").to_lowercase(),
                };
                write!(
                    f,
                    "partial({callee}, {}/{})",
                    partial.args.len(),
                    partial.callee.arity()
                )
            }
            Value::Church(Church::True) => write!(f, "true"),
            Value::Church(Church::False) => write!(f, "false"),
        }
    }
}
