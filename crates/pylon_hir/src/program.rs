//! The Resolved Program itself (§3) — the resolver's output, structurally
//! parallel to the Named Program.

use pylon_ast::{
    DefinitionSymbol, EnumSymbol, Hook, HookKey, NName, ProvenanceTime, ReachableSymbol, TableSymbol,
};
use pylon_fx_hash::{FxHashMap, FxHashSet};
use pylon_interner::Symbol;

use crate::{
    decl::{
        ResolvedBoundedLattice, ResolvedConstraint, ResolvedDefinition, ResolvedEnum,
        ResolvedIndex, ResolvedProperty, ResolvedTable,
    },
    ty::Type,
};

/// The Resolved Program (§3): structurally parallel to the Named Program,
/// with every reference bound to a declaration symbol and every type
/// collapsed to the closed canonical set.
///
/// Three convenience maps indexed by symbol are materialised alongside the
/// per-namespace maps (§4.8, §3 invariant 3: the two views always agree).
#[derive(Debug, Clone, Default)]
pub struct ResolvedProgram {
    pub definitions: FxHashMap<NName, FxHashMap<Symbol, ResolvedDefinition>>,
    pub enums: FxHashMap<NName, FxHashMap<Symbol, ResolvedEnum>>,
    pub tables: FxHashMap<NName, FxHashMap<Symbol, ResolvedTable>>,
    pub indexes: FxHashMap<NName, FxHashMap<Symbol, ResolvedIndex>>,
    pub lattices: FxHashMap<Type, ResolvedBoundedLattice>,
    pub constraints: FxHashMap<NName, Vec<ResolvedConstraint>>,
    pub properties: FxHashMap<NName, Vec<ResolvedProperty>>,

    pub definitions_by_symbol: FxHashMap<DefinitionSymbol, ResolvedDefinition>,
    pub enums_by_symbol: FxHashMap<EnumSymbol, ResolvedEnum>,
    pub tables_by_symbol: FxHashMap<TableSymbol, ResolvedTable>,

    pub hooks: FxHashMap<HookKey, Hook>,
    pub reachable: FxHashSet<ReachableSymbol>,
    pub time: ProvenanceTime,
}

impl ResolvedProgram {
    /// Creates an empty Resolved Program.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
