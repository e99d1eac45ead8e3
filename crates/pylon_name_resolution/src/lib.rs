//! The name-resolution phase of the Pylon compiler: turns a **Named
//! Program** (`pylon_ast`) into a **Resolved Program** (`pylon_hir`) by
//! binding every reference, table use, tag, and type to a declaration (or
//! producing a diagnostic explaining why it couldn't).
//!
//! The phase is a pure, accumulating-validation transformation: a single
//! run surfaces every resolution failure it can find rather than stopping
//! at the first one (§7 of SPEC_FULL.md). See [`driver::resolve`] for the
//! entry point.

#![warn(missing_docs, clippy::dbg_macro)]
#![allow(clippy::module_name_repetitions)]

mod context;
mod decl;
mod diagnostics;
mod driver;
mod expr;
mod lookup;
mod params;
mod pattern;
mod predicate;
mod shape;
mod util;

pub use crate::{
    context::Resolver,
    diagnostics::ResolutionError,
    driver::{resolve, Validation},
    lookup::{primitive_type_from_name, ReferenceTarget},
    shape::resolve_type_shape,
};

#[cfg(test)]
mod tests {
    use pylon_ast::{
        DefinitionSymbol, Identifier, NName, NamedDefinition, NamedExpression, NamedProgram, NamedType,
    };
    use pylon_filesystem::location::DUMMY_LOCATION;
    use pylon_fx_hash::FxHashMap;
    use pylon_interner::IdentifierInterner;

    use crate::resolve;

    fn ident(interner: &mut IdentifierInterner, name: &str) -> Identifier {
        Identifier { location: DUMMY_LOCATION, symbol: interner.get_or_intern(name) }
    }

    /// S1-style scenario (§8 of SPEC_FULL.md): a single root-namespace
    /// definition with a `Unit`-returning literal body resolves cleanly.
    #[test]
    fn a_single_well_formed_definition_resolves_with_no_diagnostics() {
        let mut interner = IdentifierInterner::new();
        let name = ident(&mut interner, "main");

        let definition = NamedDefinition {
            symbol: DefinitionSymbol(0),
            name,
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            return_type: NamedType::Unit,
            body: NamedExpression::Literal(pylon_ast::Literal::Unit { location: DUMMY_LOCATION }),
            location: DUMMY_LOCATION,
        };

        let mut program = NamedProgram::new();
        let mut by_name = FxHashMap::default();
        by_name.insert(name.symbol, definition);
        program.definitions.insert(NName::root(), by_name);

        let validation = resolve(&program, &interner);

        assert!(validation.is_success());
        assert_eq!(validation.diagnostics.diagnostics.len(), 0);
        assert!(validation.program.definitions_by_symbol.contains_key(&DefinitionSymbol(0)));
    }

    /// An unqualified reference to a name that doesn't exist anywhere
    /// produces exactly one `UndefinedRef` diagnostic and the program is
    /// not a success.
    #[test]
    fn an_undefined_reference_produces_exactly_one_diagnostic() {
        let mut interner = IdentifierInterner::new();
        let name = ident(&mut interner, "main");
        let missing = pylon_ast::QName {
            namespace: NName::root(),
            ident: ident(&mut interner, "does_not_exist"),
            location: DUMMY_LOCATION,
        };

        let definition = NamedDefinition {
            symbol: DefinitionSymbol(0),
            name,
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            return_type: NamedType::Unit,
            body: NamedExpression::Ref(missing),
            location: DUMMY_LOCATION,
        };

        let mut program = NamedProgram::new();
        let mut by_name = FxHashMap::default();
        by_name.insert(name.symbol, definition);
        program.definitions.insert(NName::root(), by_name);

        let validation = resolve(&program, &interner);

        assert!(!validation.is_success());
        assert_eq!(validation.diagnostics.diagnostics.len(), 1);
    }
}
