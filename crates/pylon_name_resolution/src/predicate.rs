//! The Predicate resolver (§4.5): Datalog head and body atoms. Head atoms
//! use Table lookup exclusively and so can never structurally encounter a
//! hook; `Filter` is the only body-atom kind that goes through Reference
//! lookup, and a hook result there is rejected rather than resolved (§9).

use pylon_ast::{NName, NamedBodyAtom, NamedHeadAtom};
use pylon_diagnostics::Diagnostics;
use pylon_hir::{ResolvedBodyAtom, ResolvedHeadAtom};

use crate::{context::Resolver, diagnostics::ResolutionError, lookup::ReferenceTarget, util::collect_all};

impl Resolver<'_> {
    /// Resolves a Datalog constraint head atom (§4.5).
    pub fn resolve_head_atom(
        &self,
        current_ns: &NName,
        atom: &NamedHeadAtom,
        diagnostics: &mut Diagnostics,
    ) -> Option<ResolvedHeadAtom> {
        match atom {
            NamedHeadAtom::True => Some(ResolvedHeadAtom::True),
            NamedHeadAtom::False => Some(ResolvedHeadAtom::False),

            NamedHeadAtom::Positive { table, terms, location } => {
                let table = self.lookup_table(current_ns, table, diagnostics);
                let terms = self.resolve_expression_list(current_ns, terms, diagnostics);
                Some(ResolvedHeadAtom::Positive { table: table?, terms: terms?, location: *location })
            }

            NamedHeadAtom::Negative { table, terms, location } => {
                let table = self.lookup_table(current_ns, table, diagnostics);
                let terms = self.resolve_expression_list(current_ns, terms, diagnostics);
                Some(ResolvedHeadAtom::Negative { table: table?, terms: terms?, location: *location })
            }
        }
    }

    /// Resolves a Datalog constraint body atom (§4.5).
    pub fn resolve_body_atom(
        &self,
        current_ns: &NName,
        atom: &NamedBodyAtom,
        diagnostics: &mut Diagnostics,
    ) -> Option<ResolvedBodyAtom> {
        match atom {
            NamedBodyAtom::Positive { table, terms, location } => {
                let table = self.lookup_table(current_ns, table, diagnostics);
                let terms = self.resolve_pattern_list(current_ns, terms, diagnostics);
                Some(ResolvedBodyAtom::Positive { table: table?, terms: terms?, location: *location })
            }

            NamedBodyAtom::Negative { table, terms, location } => {
                let table = self.lookup_table(current_ns, table, diagnostics);
                let terms = self.resolve_pattern_list(current_ns, terms, diagnostics);
                Some(ResolvedBodyAtom::Negative { table: table?, terms: terms?, location: *location })
            }

            NamedBodyAtom::Filter { predicate, terms, location } => {
                let target = self.lookup_reference(current_ns, predicate, diagnostics);
                let terms = self.resolve_expression_list(current_ns, terms, diagnostics);

                let predicate = match target? {
                    ReferenceTarget::Defn(symbol) => symbol,
                    ReferenceTarget::Hook(hook) => {
                        diagnostics.add_diagnostic(ResolutionError::HookUsedAsPredicate { hook, location: *location });
                        return None;
                    }
                };

                Some(ResolvedBodyAtom::Filter { predicate, terms: terms?, location: *location })
            }

            NamedBodyAtom::Loop { pattern, source, location } => {
                let pattern = self.resolve_pattern(current_ns, pattern, diagnostics);
                let source = self.resolve_expression(current_ns, source, diagnostics);
                Some(ResolvedBodyAtom::Loop { pattern: pattern?, source: source?, location: *location })
            }
        }
    }

    fn resolve_pattern_list(
        &self,
        current_ns: &NName,
        patterns: &[pylon_ast::NamedPattern],
        diagnostics: &mut Diagnostics,
    ) -> Option<Vec<pylon_hir::ResolvedPattern>> {
        collect_all(patterns.iter().map(|pattern| self.resolve_pattern(current_ns, pattern, diagnostics)))
    }
}
