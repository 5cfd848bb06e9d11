//! Resolved program representation.
//!
//! A [`Program`] is the flat, ordered output of name resolution: a sequence
//! of closure definitions and top-level applications. Every operand is a
//! relative stack distance (`1` = the most recent slot), so a program is
//! fully position-addressed and carries no names.

use std::fmt;
use std::num::NonZeroU32;

/// A relative stack address: how many slots back from the point of use.
///
/// Distances are always at least 1 (`1` names the most recently produced
/// slot).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Operand(NonZeroU32);

crate::static_assert_size!(Operand, 4);
crate::static_assert_size!(Option<Operand>, 4);

impl Operand {
    /// Create an operand from a distance. Returns `None` for distance 0.
    #[inline]
    pub const fn new(distance: u32) -> Option<Self> {
        match NonZeroU32::new(distance) {
            Some(d) => Some(Operand(d)),
            None => None,
        }
    }

    /// The relative distance this operand addresses.
    #[inline]
    pub const fn distance(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One application: apply the value at `func` to the value at `arg`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Application {
    pub func: Operand,
    pub arg: Operand,
}

impl Application {
    #[inline]
    pub const fn new(func: Operand, arg: Operand) -> Self {
        Application { func, arg }
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.func, self.arg)
    }
}

/// A function definition: an arity and an ordered body of applications.
///
/// Immutable once emitted. A closure's stack position is not stored here;
/// it is fixed when the evaluator loads the program (seed slots plus the
/// entry's index).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Closure {
    /// Number of arguments, always at least 1.
    pub arity: u32,
    pub applications: Vec<Application>,
}

impl Closure {
    pub fn new(arity: u32, applications: Vec<Application>) -> Self {
        debug_assert!(arity >= 1, "closure arity must be at least 1");
        Closure {
            arity,
            applications,
        }
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "closure/{} [", self.arity)?;
        for (i, app) in self.applications.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{app}")?;
        }
        write!(f, "]")
    }
}

/// A program entry: each one produces exactly one stack slot when loaded.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Entry {
    Closure(Closure),
    Apply(Application),
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Closure(c) => write!(f, "{c}"),
            Entry::Apply(a) => write!(f, "apply {a}"),
        }
    }
}

/// A fully resolved program: an ordered list of entries indexed from 0.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    entries: Vec<Entry>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Program { entries }
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of closure definitions in the program.
    pub fn closure_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, Entry::Closure(_)))
            .count()
    }

    /// Number of top-level applications in the program.
    pub fn application_count(&self) -> usize {
        self.len() - self.closure_count()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{i:>4}: {entry}")?;
        }
        Ok(())
    }
}
