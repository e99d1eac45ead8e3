//! The driver (§4.8): walks every namespace-indexed category of the Named
//! Program independently, accumulating diagnostics from each, then
//! assembles the Resolved Program and its by-symbol convenience maps.

use pylon_ast::NamedProgram;
use pylon_diagnostics::Diagnostics;
use pylon_fx_hash::FxHashMap;
use pylon_hir::ResolvedProgram;
use pylon_interner::IdentifierInterner;
#[cfg(feature = "debug")]
use tracing::trace;

use crate::context::Resolver;

/// The outcome of running name resolution: the best-effort Resolved Program
/// assembled so far, plus every diagnostic collected along the way. Callers
/// check [`Validation::is_success`] before trusting `program` downstream —
/// on failure it may be missing entries for any declaration a lookup failed
/// to resolve (§7: resolution is an accumulating validation, not a
/// short-circuiting one).
#[derive(Debug, Clone)]
pub struct Validation {
    /// The assembled Resolved Program. Only complete when
    /// [`Self::is_success`] is `true`.
    pub program: ResolvedProgram,
    /// Every diagnostic collected while resolving.
    pub diagnostics: Diagnostics,
}

impl Validation {
    /// Returns `true` if no fatal diagnostic was collected.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_ok()
    }
}

/// Resolves a Named Program into a Resolved Program (§4.8).
///
/// Each namespace-indexed category is walked independently, so a failure in
/// one declaration never prevents its siblings from resolving — diagnostics
/// accumulate across all of them before the final sort (§5 of
/// SPEC_FULL.md: diagnostics are sorted by `(filepath, start)`).
#[must_use]
pub fn resolve(program: &NamedProgram, identifiers: &IdentifierInterner) -> Validation {
    let resolver = Resolver::new(program, identifiers);
    let mut diagnostics = Diagnostics::new();

    let mut definitions = FxHashMap::default();
    for (ns, by_name) in &program.definitions {
        #[cfg(feature = "debug")]
        trace!("resolving {} definition(s) in namespace {:?}", by_name.len(), ns);

        let mut resolved_by_name = FxHashMap::default();
        for (name, definition) in by_name {
            if let Some(resolved) = resolver.resolve_definition(ns, definition, &mut diagnostics) {
                resolved_by_name.insert(*name, resolved);
            }
        }
        definitions.insert(ns.clone(), resolved_by_name);
    }

    let mut enums = FxHashMap::default();
    for (ns, by_name) in &program.enums {
        let mut resolved_by_name = FxHashMap::default();
        for (name, enum_decl) in by_name {
            if let Some(resolved) = resolver.resolve_enum(ns, enum_decl, &mut diagnostics) {
                resolved_by_name.insert(*name, resolved);
            }
        }
        enums.insert(ns.clone(), resolved_by_name);
    }

    let mut tables = FxHashMap::default();
    for (ns, by_name) in &program.tables {
        let mut resolved_by_name = FxHashMap::default();
        for (name, table) in by_name {
            if let Some(resolved) = resolver.resolve_table(ns, table, &mut diagnostics) {
                resolved_by_name.insert(*name, resolved);
            }
        }
        tables.insert(ns.clone(), resolved_by_name);
    }

    let mut indexes = FxHashMap::default();
    for (ns, by_name) in &program.indexes {
        let mut resolved_by_name = FxHashMap::default();
        for (name, index) in by_name {
            if let Some(resolved) = resolver.resolve_index(ns, index, &mut diagnostics) {
                resolved_by_name.insert(*name, resolved);
            }
        }
        indexes.insert(ns.clone(), resolved_by_name);
    }

    let mut lattices = FxHashMap::default();
    for (_carrier, lattice) in &program.lattices {
        // A lattice's own namespace isn't tracked separately in the Named
        // Program (§3); it resolves against the root, matching how a
        // top-level declaration would. The carrier is only resolved once,
        // inside `resolve_bounded_lattice`, and reused as the output map key
        // — resolving it a second time here would double-report a failing
        // carrier (S6).
        if let Some(resolved) = resolver.resolve_bounded_lattice(&pylon_ast::NName::root(), lattice, &mut diagnostics) {
            lattices.insert(resolved.carrier.clone(), resolved);
        }
    }

    let mut constraints = FxHashMap::default();
    for (ns, decls) in &program.constraints {
        let resolved: Vec<_> =
            decls.iter().filter_map(|constraint| resolver.resolve_constraint(ns, constraint, &mut diagnostics)).collect();
        constraints.insert(ns.clone(), resolved);
    }

    let mut properties = FxHashMap::default();
    for (ns, decls) in &program.properties {
        let resolved: Vec<_> =
            decls.iter().filter_map(|property| resolver.resolve_property(ns, property, &mut diagnostics)).collect();
        properties.insert(ns.clone(), resolved);
    }

    let definitions_by_symbol =
        definitions.values().flat_map(|by_name| by_name.values()).map(|d| (d.symbol, d.clone())).collect();
    let enums_by_symbol = enums.values().flat_map(|by_name| by_name.values()).map(|e| (e.symbol, e.clone())).collect();
    let tables_by_symbol = tables.values().flat_map(|by_name| by_name.values()).map(|t| (t.symbol(), t.clone())).collect();

    let program = ResolvedProgram {
        definitions,
        enums,
        tables,
        indexes,
        lattices,
        constraints,
        properties,
        definitions_by_symbol,
        enums_by_symbol,
        tables_by_symbol,
        hooks: program.hooks.clone(),
        reachable: program.reachable.clone(),
        time: program.time,
    };

    diagnostics.diagnostics.sort_by_key(|diagnostic| {
        diagnostic
            .labels
            .iter()
            .find(|label| label.style == pylon_diagnostics::LabelStyle::Primary)
            .map(|label| (label.location.filepath, label.location.start))
    });

    Validation { program, diagnostics }
}
