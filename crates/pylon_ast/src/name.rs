//! Namespaces, identifiers, and qualified names — the vocabulary every other
//! module in this crate is written in terms of.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pylon_filesystem::location::Location;
use pylon_interner::Symbol;

/// An identifier with a location, e.g. `f`, `table`, `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Identifier {
    pub location: Location,
    pub symbol: Symbol,
}

/// A namespace name: an ordered sequence of identifier symbols. The empty
/// sequence is the **root namespace** (§3, §GLOSSARY).
///
/// This is the canonical, location-free form used as a map key (the Named
/// Program's per-category maps are keyed by namespace-path); the identifiers
/// that spelled it out at a particular use site keep their own locations in
/// [`QName`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NName(pub Vec<Symbol>);

impl NName {
    /// The root namespace — the empty path.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns `true` for the root namespace.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

/// A qualified name as written at a use site: a (possibly empty) namespace
/// path plus a local identifier. Unqualified iff `namespace` is the root
/// namespace (§GLOSSARY).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QName {
    pub namespace: NName,
    pub ident: Identifier,
    pub location: Location,
}

impl QName {
    /// A `QName` is unqualified iff it carries no namespace path. This is
    /// the branch point for every lookup's qualified/unqualified split
    /// (§4.1).
    #[must_use]
    pub fn is_qualified(&self) -> bool {
        !self.namespace.is_root()
    }
}

/// The key hooks are indexed by: a namespace plus a local name (§3, §6).
/// `program.hooks` is keyed by *fully-qualified* symbol, constructed exactly
/// this way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HookKey {
    pub namespace: NName,
    pub name: Symbol,
}
