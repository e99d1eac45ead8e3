//! Resolved declarations and the smaller structures they're built from:
//! parameters, Datalog atoms, enum cases, table attributes (§4.5, §4.6,
//! §4.7).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pylon_ast::{DefinitionSymbol, EnumSymbol, Identifier, NamedTypeParameter, TableSymbol, VariableSymbol};
use pylon_filesystem::location::Location;

use crate::{expr::ResolvedExpression, pattern::ResolvedPattern, ty::{ShapeType, Type}};

/// A resolved formal parameter: `ty` is now a canonical [`Type`]; `symbol`
/// and `location` are carried unchanged from the Named Program (§4.6).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedFormalParameter {
    pub symbol: VariableSymbol,
    pub name: Identifier,
    pub ty: Type,
    pub location: Location,
}

/// Type parameters and constraint parameters pass through name resolution
/// structurally and unchanged (§4.6: "full type resolution is deferred") —
/// there is no `Resolved*Parameter` type distinct from the Named one.
pub use pylon_ast::NamedTypeParameter as ResolvedTypeParameter;
pub use pylon_ast::NamedConstraintParameter as ResolvedConstraintParameter;

/// A resolved function or value definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedDefinition {
    pub symbol: DefinitionSymbol,
    pub name: Identifier,
    pub type_parameters: Vec<NamedTypeParameter>,
    pub parameters: Vec<ResolvedFormalParameter>,
    pub return_type: Type,
    pub body: ResolvedExpression,
    pub location: Location,
}

/// One resolved case of an enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedEnumCase {
    pub tag: Identifier,
    pub payload: Type,
}

/// A resolved enum declaration. `declared_shape` keeps the enum's written
/// form (via the Type resolver, §4.2) rather than the canonical `Type` of
/// its cases, so diagnostics can still show e.g. `Option[T]` instead of an
/// opaque symbol.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedEnum {
    pub symbol: EnumSymbol,
    pub name: Identifier,
    pub type_parameters: Vec<NamedTypeParameter>,
    pub cases: Vec<ResolvedEnumCase>,
    pub declared_shape: ShapeType,
    pub location: Location,
}

/// One resolved attribute of a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedAttribute {
    pub name: Identifier,
    pub ty: Type,
}

/// A resolved table declaration (§4.7 "Table (Relation)" / "Table
/// (Lattice-valued)").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResolvedTable {
    Relation {
        symbol: TableSymbol,
        name: Identifier,
        attributes: Vec<ResolvedAttribute>,
        location: Location,
    },
    Lattice {
        symbol: TableSymbol,
        name: Identifier,
        keys: Vec<ResolvedAttribute>,
        value: ResolvedAttribute,
        location: Location,
    },
}

impl ResolvedTable {
    #[must_use]
    pub const fn symbol(&self) -> TableSymbol {
        match self {
            Self::Relation { symbol, .. } | Self::Lattice { symbol, .. } => *symbol,
        }
    }
}

/// A resolved index: the referenced table is now bound to its
/// [`TableSymbol`] (§4.7 "Index", §8 property 5 "Index table bind").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedIndex {
    pub name: Identifier,
    pub table: TableSymbol,
    pub attribute_groups: Vec<Vec<Identifier>>,
    pub location: Location,
}

/// A resolved bounded lattice: the carrier is now a canonical `Type`, and
/// the five operators resolve in the fixed order the spec requires —
/// bottom, top, less-or-equal, least-upper-bound, greatest-lower-bound
/// (§4.7 "BoundedLattice").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedBoundedLattice {
    pub carrier: Type,
    pub bottom: ResolvedExpression,
    pub top: ResolvedExpression,
    pub leq: ResolvedExpression,
    pub lub: ResolvedExpression,
    pub glb: ResolvedExpression,
    pub location: Location,
}

/// A resolved Datalog constraint head atom (§4.5).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResolvedHeadAtom {
    True,
    False,
    Positive {
        table: TableSymbol,
        terms: Vec<ResolvedExpression>,
        location: Location,
    },
    Negative {
        table: TableSymbol,
        terms: Vec<ResolvedExpression>,
        location: Location,
    },
}

/// A resolved Datalog constraint body atom (§4.5).
///
/// `Filter::predicate` is always a [`DefinitionSymbol`], never a hook: a
/// filter's Reference lookup may structurally land on a hook, but this
/// phase rejects that case as
/// [`crate::diagnostics::ResolutionError::HookUsedAsPredicate`] instead of
/// emitting a node for it (see DESIGN.md's entry on the §9 open question).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResolvedBodyAtom {
    Positive {
        table: TableSymbol,
        terms: Vec<ResolvedPattern>,
        location: Location,
    },
    Negative {
        table: TableSymbol,
        terms: Vec<ResolvedPattern>,
        location: Location,
    },
    Filter {
        predicate: DefinitionSymbol,
        terms: Vec<ResolvedExpression>,
        location: Location,
    },
    Loop {
        pattern: ResolvedPattern,
        source: ResolvedExpression,
        location: Location,
    },
}

/// A resolved Datalog constraint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedConstraint {
    pub head: ResolvedHeadAtom,
    pub body: Vec<ResolvedBodyAtom>,
    pub location: Location,
}

/// A resolved property.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedProperty {
    pub name: Identifier,
    pub expression: ResolvedExpression,
    pub location: Location,
}
