//! The **Resolved Program** data model (§3 of the name-resolution spec): the
//! output of [`pylon_name_resolution`](../pylon_name_resolution/index.html).
//!
//! Structurally parallel to [`pylon_ast`]'s Named Program: every `QName` in
//! reference position has become a declaration symbol, and every written
//! type has become a canonical [`ty::Type`].

#![warn(missing_docs, clippy::dbg_macro)]
#![allow(clippy::module_name_repetitions)]

pub mod decl;
pub mod expr;
pub mod pattern;
pub mod program;
pub mod ty;

pub use crate::{
    decl::{
        ResolvedAttribute, ResolvedBodyAtom, ResolvedBoundedLattice, ResolvedConstraint,
        ResolvedConstraintParameter, ResolvedDefinition, ResolvedEnum, ResolvedEnumCase,
        ResolvedFormalParameter, ResolvedHeadAtom, ResolvedIndex, ResolvedProperty, ResolvedTable,
        ResolvedTypeParameter,
    },
    expr::{ResolvedExpression, ResolvedMatchRule, ResolvedSwitchRule},
    pattern::ResolvedPattern,
    program::ResolvedProgram,
    ty::{Kind, ShapeType, Type},
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_resolved_program_round_trips_through_new() {
        let program = ResolvedProgram::new();
        assert!(program.definitions.is_empty());
        assert!(program.definitions_by_symbol.is_empty());
        assert!(program.hooks.is_empty());
    }

    #[test]
    fn int_and_float_aliases_collapse_to_sized_variants() {
        // §8: "An unqualified type `Int` resolves to `Int32`; `Float`
        // resolves to `Float64`." The closed `Type` set has no separate
        // `Int`/`Float` variants at all — the alias collapses at Type
        // lookup time, before a `Type` value is ever constructed.
        assert_ne!(Type::Int32, Type::Int64);
        assert_ne!(Type::Float64, Type::Float32);
    }
}
