//! The Named Program itself (§3) — the resolver's input.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pylon_fx_hash::{FxHashMap, FxHashSet};
use pylon_interner::Symbol;

use crate::{
    decl::{
        NamedBoundedLattice, NamedConstraint, NamedDefinition, NamedEnum, NamedIndex,
        NamedProperty, NamedTable,
    },
    name::{HookKey, NName},
    symbol::ReachableSymbol,
    ty::NamedType,
};

/// A pre-compiled, host-provided value referenced by fully-qualified symbol
/// (§GLOSSARY "Hook"). Treated as fully opaque by this phase: "the resolver
/// only asks whether a key is present" (§6). A real host embedding would
/// carry actual data here; this layer never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hook;

/// Opaque provenance metadata threaded through unchanged (§3 "time"). Its
/// contents mean nothing to this phase; it is never inspected, only carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProvenanceTime(pub u64);

/// The Named Program: the output of the naming phase, and the input to name
/// resolution (§3).
#[derive(Debug, Clone, Default)]
pub struct NamedProgram {
    pub definitions: FxHashMap<NName, FxHashMap<Symbol, NamedDefinition>>,
    pub enums: FxHashMap<NName, FxHashMap<Symbol, NamedEnum>>,
    pub tables: FxHashMap<NName, FxHashMap<Symbol, NamedTable>>,
    pub indexes: FxHashMap<NName, FxHashMap<Symbol, NamedIndex>>,

    /// Keyed by the lattice's carrier type (§3). `NamedType` never contains
    /// float literals, so it derives `Eq`/`Hash` safely.
    pub lattices: FxHashMap<NamedType, NamedBoundedLattice>,

    pub constraints: FxHashMap<NName, Vec<NamedConstraint>>,
    pub properties: FxHashMap<NName, Vec<NamedProperty>>,
    pub hooks: FxHashMap<HookKey, Hook>,
    pub reachable: FxHashSet<ReachableSymbol>,
    pub time: ProvenanceTime,
}

impl NamedProgram {
    /// Creates an empty Named Program — useful as a base for hand-built test
    /// fixtures (§4 of SPEC_FULL.md: fixtures are built by hand, not
    /// generated).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
