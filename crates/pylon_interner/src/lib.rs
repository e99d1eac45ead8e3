//! String interning for the Pylon compiler.
//!
//! # String interning
//!
//! It allows caching strings and associating them with unique symbols,
//! which gives constant-time equality comparisons and lookups for
//! everything downstream that would otherwise compare source text.
//!
//! ```txt
//! "table" -> intern -> Symbol(1)
//! "lattice" -> intern -> Symbol(2)
//! "table" -> intern -> Symbol(1)
//!
//! Symbol(1) == Symbol(1) // constant time comparison
//! Symbol(1) != Symbol(2)
//! ```
//!
//! Two interners are exposed: [`IdentifierInterner`] for source identifiers
//! and [`PathInterner`] for source file paths. Both are thin instances of
//! the same generic [`Interner`].

#![warn(missing_docs, clippy::dbg_macro)]
#![allow(clippy::module_name_repetitions)]

use std::fmt;

use pylon_fx_hash::FxHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generic string interner: owns the string table, hands back small `Copy`
/// ids, and resolves ids back to text.
#[derive(Debug, Clone, Default)]
struct Interner {
    strings: Vec<Box<str>>,
    ids: FxHashMap<Box<str>, u32>,
}

impl Interner {
    fn new() -> Self {
        Self::default()
    }

    fn get_or_intern(&mut self, string: impl AsRef<str>) -> u32 {
        let string = string.as_ref();

        if let Some(id) = self.ids.get(string) {
            return *id;
        }

        let id = u32::try_from(self.strings.len()).expect("interner overflowed u32 ids");
        self.strings.push(string.into());
        self.ids.insert(string.into(), id);
        id
    }

    fn resolve(&self, id: u32) -> Option<&str> {
        self.strings.get(id as usize).map(AsRef::as_ref)
    }
}

/// A unique id corresponding to an interned identifier's text.
///
/// This is distinct from a *declaration symbol* (see `pylon_ast::Symbol`
/// and friends): this id only identifies interned text, two unrelated
/// declarations with the same spelling share one [`Symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbol(pub u32);

/// Id of an identifier that will never exist in any [`IdentifierInterner`].
pub const DUMMY_SYMBOL: Symbol = Symbol(u32::MAX);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Interns source identifiers (names of definitions, tables, enums, tags,
/// namespace segments, ...).
#[derive(Debug, Clone, Default)]
pub struct IdentifierInterner {
    inner: Interner,
}

impl IdentifierInterner {
    /// Creates a new, empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `string`, returning its [`Symbol`]. Interning the same text
    /// twice returns the same symbol.
    pub fn get_or_intern(&mut self, string: impl AsRef<str>) -> Symbol {
        Symbol(self.inner.get_or_intern(string))
    }

    /// Interns a pair of strings, in order.
    pub fn get_or_intern_tuple<S: AsRef<str>>(&mut self, strings: [S; 2]) -> (Symbol, Symbol) {
        let [a, b] = strings;
        (self.get_or_intern(a), self.get_or_intern(b))
    }

    /// Resolves a previously interned [`Symbol`] back to its text.
    #[must_use]
    pub fn resolve(&self, symbol: Symbol) -> Option<&str> {
        self.inner.resolve(symbol.0)
    }
}

/// A unique id corresponding to an interned source file path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathId(pub u32);

/// Id of a path that will never exist in any [`PathInterner`]; used as a
/// placeholder in tests and dummy locations.
pub const DUMMY_PATH_ID: PathId = PathId(u32::MAX);

/// Interns source file paths.
#[derive(Debug, Clone, Default)]
pub struct PathInterner {
    inner: Interner,
}

impl PathInterner {
    /// Creates a new, empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `path`, returning its [`PathId`].
    pub fn get_or_intern(&mut self, path: impl AsRef<str>) -> PathId {
        PathId(self.inner.get_or_intern(path))
    }

    /// Interns a pair of paths, in order.
    pub fn get_or_intern_tuple<S: AsRef<str>>(&mut self, paths: [S; 2]) -> (PathId, PathId) {
        let [a, b] = paths;
        (self.get_or_intern(a), self.get_or_intern(b))
    }

    /// Resolves a previously interned [`PathId`] back to its text.
    #[must_use]
    pub fn resolve(&self, path_id: PathId) -> Option<&str> {
        self.inner.resolve(path_id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_same_string_twice_returns_same_symbol() {
        let mut interner = IdentifierInterner::new();
        let a = interner.get_or_intern("foo");
        let b = interner.get_or_intern("foo");

        assert_eq!(a, b);
    }

    #[test]
    fn distinct_strings_get_distinct_symbols() {
        let mut interner = IdentifierInterner::new();
        let a = interner.get_or_intern("foo");
        let b = interner.get_or_intern("bar");

        assert_ne!(a, b);
    }

    #[test]
    fn resolve_round_trips() {
        let mut interner = IdentifierInterner::new();
        let symbol = interner.get_or_intern("table_name");

        assert_eq!(interner.resolve(symbol), Some("table_name"));
    }

    #[test]
    fn path_interner_tuple() {
        let mut interner = PathInterner::new();
        let (a, b) = interner.get_or_intern_tuple(["a/package.pylon", "a/a.pylon"]);

        assert_ne!(a, b);
        assert_eq!(interner.resolve(a), Some("a/package.pylon"));
        assert_eq!(interner.resolve(b), Some("a/a.pylon"));
    }
}
