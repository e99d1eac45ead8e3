//! The Declaration resolvers (§4.7): definitions, enums, indexes, bounded
//! lattices, tables, constraints, and properties.

use pylon_ast::{
    NName, NamedAttribute, NamedBoundedLattice, NamedConstraint, NamedDefinition, NamedEnum, NamedIndex,
    NamedProperty, NamedTable,
};
use pylon_diagnostics::Diagnostics;
use pylon_hir::{
    ResolvedAttribute, ResolvedBoundedLattice, ResolvedConstraint, ResolvedDefinition, ResolvedEnum, ResolvedIndex,
    ResolvedProperty, ResolvedTable,
};

use crate::{context::Resolver, util::collect_all};

impl Resolver<'_> {
    /// Resolves a function or value definition: type parameters pass through,
    /// formal parameters and the return type resolve via Type lookup, and
    /// the body resolves as an expression (§4.7 "Definition").
    pub fn resolve_definition(
        &self,
        current_ns: &NName,
        definition: &NamedDefinition,
        diagnostics: &mut Diagnostics,
    ) -> Option<ResolvedDefinition> {
        let type_parameters = definition.type_parameters.iter().map(|tp| self.resolve_type_parameter(tp)).collect();
        let parameters = self.resolve_parameter_list(current_ns, &definition.parameters, diagnostics);
        let return_type = self.lookup_type(current_ns, &definition.return_type, diagnostics);
        let body = self.resolve_expression(current_ns, &definition.body, diagnostics);

        Some(ResolvedDefinition {
            symbol: definition.symbol,
            name: definition.name,
            type_parameters,
            parameters: parameters?,
            return_type: return_type?,
            body: body?,
            location: definition.location,
        })
    }

    /// Resolves an enum declaration: type parameters pass through, each
    /// case's payload resolves via Type lookup, and the declared shape
    /// resolves via the Type resolver rather than Type lookup (§4.7 "Enum").
    pub fn resolve_enum(&self, current_ns: &NName, enum_decl: &NamedEnum, diagnostics: &mut Diagnostics) -> Option<ResolvedEnum> {
        let type_parameters = enum_decl.type_parameters.iter().map(|tp| self.resolve_type_parameter(tp)).collect();

        let cases = collect_all(enum_decl.cases.iter().map(|case| {
            let payload = self.lookup_type(current_ns, &case.payload, diagnostics)?;
            Some(pylon_hir::ResolvedEnumCase { tag: case.tag, payload })
        }));

        let declared_shape = crate::shape::resolve_type_shape(&enum_decl.declared_shape);

        Some(ResolvedEnum {
            symbol: enum_decl.symbol,
            name: enum_decl.name,
            type_parameters,
            cases: cases?,
            declared_shape,
            location: enum_decl.location,
        })
    }

    /// Resolves a table declaration: every attribute's type resolves via
    /// Type lookup (§4.7 "Table (Relation)" / "Table (Lattice-valued)").
    pub fn resolve_table(&self, current_ns: &NName, table: &NamedTable, diagnostics: &mut Diagnostics) -> Option<ResolvedTable> {
        match table {
            NamedTable::Relation { symbol, name, attributes, location } => {
                let attributes = self.resolve_attribute_list(current_ns, attributes, diagnostics)?;
                Some(ResolvedTable::Relation { symbol: *symbol, name: *name, attributes, location: *location })
            }
            NamedTable::Lattice { symbol, name, keys, value, location } => {
                let keys = self.resolve_attribute_list(current_ns, keys, diagnostics);
                let value = self.resolve_attribute(current_ns, value, diagnostics);
                Some(ResolvedTable::Lattice { symbol: *symbol, name: *name, keys: keys?, value: value?, location: *location })
            }
        }
    }

    fn resolve_attribute(&self, current_ns: &NName, attribute: &NamedAttribute, diagnostics: &mut Diagnostics) -> Option<ResolvedAttribute> {
        let ty = self.lookup_type(current_ns, &attribute.ty, diagnostics)?;
        Some(ResolvedAttribute { name: attribute.name, ty })
    }

    fn resolve_attribute_list(
        &self,
        current_ns: &NName,
        attributes: &[NamedAttribute],
        diagnostics: &mut Diagnostics,
    ) -> Option<Vec<ResolvedAttribute>> {
        collect_all(attributes.iter().map(|attribute| self.resolve_attribute(current_ns, attribute, diagnostics)))
    }

    /// Resolves an index declaration: only `table` needs binding (§4.7
    /// "Index").
    pub fn resolve_index(&self, current_ns: &NName, index: &NamedIndex, diagnostics: &mut Diagnostics) -> Option<ResolvedIndex> {
        let table = self.lookup_table(current_ns, &index.table, diagnostics)?;
        Some(ResolvedIndex {
            name: index.name,
            table,
            attribute_groups: index.attribute_groups.clone(),
            location: index.location,
        })
    }

    /// Resolves a bounded lattice: the carrier resolves via Type lookup,
    /// then the five operator expressions resolve in the fixed order the
    /// spec requires (§4.7 "BoundedLattice").
    pub fn resolve_bounded_lattice(
        &self,
        current_ns: &NName,
        lattice: &NamedBoundedLattice,
        diagnostics: &mut Diagnostics,
    ) -> Option<ResolvedBoundedLattice> {
        let carrier = self.lookup_type(current_ns, &lattice.carrier, diagnostics);
        let bottom = self.resolve_expression(current_ns, &lattice.bottom, diagnostics);
        let top = self.resolve_expression(current_ns, &lattice.top, diagnostics);
        let leq = self.resolve_expression(current_ns, &lattice.leq, diagnostics);
        let lub = self.resolve_expression(current_ns, &lattice.lub, diagnostics);
        let glb = self.resolve_expression(current_ns, &lattice.glb, diagnostics);

        Some(ResolvedBoundedLattice {
            carrier: carrier?,
            bottom: bottom?,
            top: top?,
            leq: leq?,
            lub: lub?,
            glb: glb?,
            location: lattice.location,
        })
    }

    /// Resolves a Datalog constraint: the head atom, then every body atom in
    /// order (§4.5, §4.7 "Constraint").
    pub fn resolve_constraint(
        &self,
        current_ns: &NName,
        constraint: &NamedConstraint,
        diagnostics: &mut Diagnostics,
    ) -> Option<ResolvedConstraint> {
        let head = self.resolve_head_atom(current_ns, &constraint.head, diagnostics);
        let body = collect_all(constraint.body.iter().map(|atom| self.resolve_body_atom(current_ns, atom, diagnostics)));

        Some(ResolvedConstraint { head: head?, body: body?, location: constraint.location })
    }

    /// Resolves a named property: just its expression (§4.7 "Property").
    pub fn resolve_property(&self, current_ns: &NName, property: &NamedProperty, diagnostics: &mut Diagnostics) -> Option<ResolvedProperty> {
        let expression = self.resolve_expression(current_ns, &property.expression, diagnostics)?;
        Some(ResolvedProperty { name: property.name, expression, location: property.location })
    }
}
