//! Index-stamped name table.
//!
//! Every slot the program will occupy at runtime has an absolute index:
//! the four built-ins are slots 0..=3, and each definition, argument, and
//! application result takes the next one. A binding records the index of
//! the slot it names (its stamp). `depth` is the index of the most recent
//! slot, so a binding's relative distance is `depth - stamp + 1`.
//!
//! Formal arguments are not stored as bindings. While a definition is open
//! the table remembers the stamp of its first argument, and `.1` through
//! `.k` resolve arithmetically against it.

use grass_ir::Span;
use rustc_hash::FxHashMap;

/// Built-in names and their slots.
const BUILTINS: [(&str, u64); 5] = [("in", 0), ("w", 1), ("0", 1), ("suc", 2), ("out", 3)];

/// A named slot.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Binding {
    pub stamp: u64,
    /// Local bindings disappear when the enclosing definition closes.
    pub local: bool,
    /// Declaration site; `None` for built-ins.
    pub span: Option<Span>,
}

/// Formal arguments of the definition being resolved.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct Arguments {
    first: u64,
    arity: u32,
}

/// Name table plus slot counter for one parse.
#[derive(Clone, Debug)]
pub struct NameTable {
    bindings: FxHashMap<String, Binding>,
    arguments: Option<Arguments>,
    depth: u64,
}

impl Default for NameTable {
    fn default() -> Self {
        Self::new()
    }
}

impl NameTable {
    /// A table holding only the built-ins.
    pub fn new() -> Self {
        let bindings = BUILTINS
            .iter()
            .map(|&(name, stamp)| {
                let binding = Binding {
                    stamp,
                    local: false,
                    span: None,
                };
                (name.to_owned(), binding)
            })
            .collect();
        NameTable {
            bindings,
            arguments: None,
            depth: 3,
        }
    }

    /// Index of the most recent slot.
    pub fn depth(&self) -> u64 {
        self.depth
    }

    /// Account for one more slot.
    pub fn advance(&mut self) {
        self.depth += 1;
    }

    /// Open a definition of `arity` arguments. Returns the depth to pass to
    /// [`NameTable::close_definition`].
    pub fn open_definition(&mut self, arity: u32) -> u64 {
        let start = self.depth;
        self.arguments = Some(Arguments {
            first: start + 1,
            arity,
        });
        self.depth += u64::from(arity);
        start
    }

    /// Drop the definition's locals and leave one slot for the closure
    /// itself.
    pub fn close_definition(&mut self, start: u64) {
        self.bindings.retain(|_, binding| !binding.local);
        self.arguments = None;
        self.depth = start + 1;
    }

    /// Bind `name` to the most recent slot.
    ///
    /// Fails with the previous declaration site if the name is taken.
    pub fn declare(&mut self, name: &str, local: bool, span: Span) -> Result<(), Option<Span>> {
        if let Some(existing) = self.bindings.get(name) {
            return Err(existing.span);
        }
        if self.argument_stamp(name).is_some() {
            return Err(None);
        }
        self.bindings.insert(
            name.to_owned(),
            Binding {
                stamp: self.depth,
                local,
                span: Some(span),
            },
        );
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Relative distance of `name` from the next slot to be produced.
    pub fn distance(&self, name: &str) -> Option<u64> {
        let stamp = self
            .argument_stamp(name)
            .or_else(|| self.bindings.get(name).map(|b| b.stamp))?;
        Some(self.depth - stamp + 1)
    }

    /// Stamp of `.i` when a definition with at least `i` arguments is open.
    fn argument_stamp(&self, name: &str) -> Option<u64> {
        let arguments = self.arguments?;
        let digits = name.strip_prefix('.')?;
        if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let index: u32 = digits.parse().ok()?;
        (1..=arguments.arity)
            .contains(&index)
            .then_some(arguments.first + u64::from(index) - 1)
    }

    /// Number of named bindings, not counting formal arguments.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Whether `name` collides with reference syntax and cannot be declared.
///
/// Reserved are names built only from `.N` groups where `N` has a nonzero
/// digit (`.1`, `.02`, `.1.2`), and names built only from `'` and `'N`
/// groups.
pub fn is_reserved_name(name: &str) -> bool {
    is_group_sequence(name, '.', false) || is_group_sequence(name, '\'', true)
}

/// `name` is one or more groups of `marker` followed by digits containing
/// a nonzero digit. With `bare_marker`, a group may also have no digits.
fn is_group_sequence(name: &str, marker: char, bare_marker: bool) -> bool {
    let Some(rest) = name.strip_prefix(marker) else {
        return false;
    };
    rest.split(marker).all(|digits| {
        if digits.is_empty() {
            return bare_marker;
        }
        digits.bytes().all(|b| b.is_ascii_digit()) && digits.bytes().any(|b| b != b'0')
    })
}

#[cfg(test)]
mod tests;
