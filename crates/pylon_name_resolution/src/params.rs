//! The Params resolver (§4.6): formal parameters resolve their type via
//! Type lookup; type parameters and constraint parameters pass through
//! structurally (full bound resolution is deferred).

use pylon_ast::{NName, NamedFormalParameter, NamedTypeParameter, NamedConstraintParameter};
use pylon_diagnostics::Diagnostics;
use pylon_hir::{ResolvedFormalParameter, ResolvedTypeParameter, ResolvedConstraintParameter};

use crate::{context::Resolver, util::collect_all};

impl Resolver<'_> {
    /// Resolves a single formal parameter's type, preserving `symbol`,
    /// `name`, and `location` (§4.6).
    pub fn resolve_formal_parameter(
        &self,
        current_ns: &NName,
        parameter: &NamedFormalParameter,
        diagnostics: &mut Diagnostics,
    ) -> Option<ResolvedFormalParameter> {
        let ty = self.lookup_type(current_ns, &parameter.ty, diagnostics)?;
        Some(ResolvedFormalParameter {
            symbol: parameter.symbol,
            name: parameter.name,
            ty,
            location: parameter.location,
        })
    }

    /// Resolves a list of formal parameters, accumulating failures from each
    /// independently before collapsing to a single `Option`.
    pub(crate) fn resolve_parameter_list(
        &self,
        current_ns: &NName,
        parameters: &[NamedFormalParameter],
        diagnostics: &mut Diagnostics,
    ) -> Option<Vec<ResolvedFormalParameter>> {
        collect_all(parameters.iter().map(|parameter| self.resolve_formal_parameter(current_ns, parameter, diagnostics)))
    }

    /// Type parameters pass through unchanged (§4.6).
    #[must_use]
    pub fn resolve_type_parameter(&self, parameter: &NamedTypeParameter) -> ResolvedTypeParameter {
        parameter.clone()
    }

    /// Constraint parameters pass through unchanged (§4.6).
    #[must_use]
    pub fn resolve_constraint_parameter(&self, parameter: &NamedConstraintParameter) -> ResolvedConstraintParameter {
        parameter.clone()
    }
}
