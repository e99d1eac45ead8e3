//! The **Named Program** data model (§3 of the name-resolution spec): the
//! input to [`pylon_name_resolution`](../pylon_name_resolution/index.html).
//!
//! A Named Program is produced by an earlier "naming" phase — out of scope
//! here (§1) — that attaches preliminary symbols to identifiers and groups
//! declarations by namespace. This crate only describes the shape of that
//! program; it performs no resolution itself.

#![warn(missing_docs, clippy::dbg_macro)]
#![allow(clippy::module_name_repetitions)]

pub mod decl;
pub mod expr;
pub mod literal;
pub mod name;
pub mod operator;
pub mod pattern;
pub mod program;
pub mod symbol;
pub mod ty;

pub use crate::{
    decl::{
        NamedAttribute, NamedBodyAtom, NamedBoundedLattice, NamedConstraint,
        NamedConstraintParameter, NamedDefinition, NamedEnum, NamedEnumCase, NamedFormalParameter,
        NamedHeadAtom, NamedIndex, NamedProperty, NamedTable, NamedTypeParameter,
    },
    expr::{NamedExpression, NamedMatchRule, NamedSwitchRule, NativeMember},
    literal::Literal,
    name::{HookKey, Identifier, NName, QName},
    operator::{BinaryOperator, UnaryOperator},
    pattern::NamedPattern,
    program::{Hook, NamedProgram, ProvenanceTime},
    symbol::{DefinitionSymbol, EnumSymbol, ReachableSymbol, TableSymbol, TypeVar, VariableSymbol},
    ty::NamedType,
};

#[cfg(test)]
mod tests {
    use pylon_filesystem::location::DUMMY_LOCATION;
    use pylon_interner::{IdentifierInterner, PathInterner};

    use super::*;

    #[test]
    fn nname_root_is_empty_and_unqualified() {
        let root = NName::root();
        assert!(root.is_root());
        assert_eq!(root, NName(Vec::new()));
    }

    #[test]
    fn qname_qualification_follows_namespace_emptiness() {
        let mut identifiers = IdentifierInterner::new();
        let mut paths = PathInterner::new();
        let _ = paths.get_or_intern("test.pylon");

        let f = identifiers.get_or_intern("f");
        let n = identifiers.get_or_intern("N");

        let unqualified = QName {
            namespace: NName::root(),
            ident: Identifier {
                location: DUMMY_LOCATION,
                symbol: f,
            },
            location: DUMMY_LOCATION,
        };
        assert!(!unqualified.is_qualified());

        let qualified = QName {
            namespace: NName(vec![n]),
            ident: Identifier {
                location: DUMMY_LOCATION,
                symbol: f,
            },
            location: DUMMY_LOCATION,
        };
        assert!(qualified.is_qualified());
    }

    #[test]
    fn empty_named_program_round_trips_through_new() {
        let program = NamedProgram::new();
        assert!(program.definitions.is_empty());
        assert!(program.hooks.is_empty());
        assert!(program.reachable.is_empty());
    }
}
