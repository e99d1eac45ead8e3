//! The resolver's shared, read-only context (§4: "All resolvers share
//! read-only access to the Named Program").
//!
//! [`Resolver`] itself carries no mutable state — every `resolve_*`/
//! `lookup_*` method takes the [`pylon_diagnostics::Diagnostics`]
//! accumulator as an explicit `&mut` parameter, the way
//! `ry_name_resolution::ResolutionEnvironment::resolve_path` threads a
//! `&mut GlobalDiagnostics` through its lookup rather than storing it on
//! `self`. That keeps `Resolver` itself `Copy`-able and safe to share across
//! namespaces if a caller chooses to parallelise (§5).

use pylon_ast::NamedProgram;
use pylon_interner::IdentifierInterner;

/// Read-only context threaded through every resolver method: the Named
/// Program being resolved, and the interner needed to compare identifier
/// text against the closed primitive-type name set (§4.1 Type lookup).
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    pub(crate) program: &'a NamedProgram,
    pub(crate) identifiers: &'a IdentifierInterner,
}

impl<'a> Resolver<'a> {
    /// Creates a new resolver context over an immutable Named Program.
    #[must_use]
    pub const fn new(program: &'a NamedProgram, identifiers: &'a IdentifierInterner) -> Self {
        Self { program, identifiers }
    }
}
