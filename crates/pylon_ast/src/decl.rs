//! Declarations and the smaller structures they're built from: parameters,
//! Datalog atoms, enum cases, table attributes. Resolved one-for-one by the
//! declaration resolvers (§4.7) and the predicate/params resolvers (§4.5,
//! §4.6).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pylon_filesystem::location::Location;

use crate::{
    expr::NamedExpression,
    name::{Identifier, QName},
    pattern::NamedPattern,
    symbol::{DefinitionSymbol, EnumSymbol, TableSymbol, VariableSymbol},
    ty::NamedType,
};

/// A formal parameter: resolve `ty` via Type lookup, preserve `symbol` and
/// `location` (§4.6).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedFormalParameter {
    pub symbol: VariableSymbol,
    pub name: Identifier,
    pub ty: NamedType,
    pub location: Location,
}

/// A type parameter, e.g. the `T` in `Option[T]`. Passed through
/// structurally — full type resolution of bounds is deferred to a later
/// phase (§4.6).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedTypeParameter {
    pub name: Identifier,
    pub bound: Option<NamedType>,
}

/// A constraint parameter (e.g. a type-class-style bound). Passed through
/// structurally, same as a type parameter (§4.6).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedConstraintParameter {
    pub name: Identifier,
    pub class: QName,
}

/// A function or value definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedDefinition {
    pub symbol: DefinitionSymbol,
    pub name: Identifier,
    pub type_parameters: Vec<NamedTypeParameter>,
    pub parameters: Vec<NamedFormalParameter>,
    pub return_type: NamedType,
    pub body: NamedExpression,
    pub location: Location,
}

/// One case of an enum declaration, e.g. `case A(Int)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedEnumCase {
    pub tag: Identifier,
    pub payload: NamedType,
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedEnum {
    pub symbol: EnumSymbol,
    pub name: Identifier,
    pub type_parameters: Vec<NamedTypeParameter>,
    pub cases: Vec<NamedEnumCase>,

    /// The enum's own declared type shape, e.g. `Option[T]`. Resolved by the
    /// Type resolver (§4.2), not Type lookup, so it keeps its written form
    /// for diagnostics.
    pub declared_shape: NamedType,

    pub location: Location,
}

/// One attribute of a table, e.g. `x: Int` in `rel R(x: Int)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedAttribute {
    pub name: Identifier,
    pub ty: NamedType,
}

/// A table declaration: either a plain relation, or a lattice-valued table
/// keyed by its `keys` attributes with a single lattice-typed `value`
/// attribute (§4.7 "Table (Relation)" / "Table (Lattice-valued)").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NamedTable {
    Relation {
        symbol: TableSymbol,
        name: Identifier,
        attributes: Vec<NamedAttribute>,
        location: Location,
    },
    Lattice {
        symbol: TableSymbol,
        name: Identifier,
        keys: Vec<NamedAttribute>,
        value: NamedAttribute,
        location: Location,
    },
}

impl NamedTable {
    #[must_use]
    pub const fn symbol(&self) -> TableSymbol {
        match self {
            Self::Relation { symbol, .. } | Self::Lattice { symbol, .. } => *symbol,
        }
    }

    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Relation { location, .. } | Self::Lattice { location, .. } => *location,
        }
    }
}

/// An index declaration: groups of attributes of a referenced table, used to
/// speed up the Datalog solver's joins. Resolution only has to bind `table`
/// (§4.7 "Index").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedIndex {
    pub name: Identifier,
    pub table: QName,
    pub attribute_groups: Vec<Vec<Identifier>>,
    pub location: Location,
}

/// A user-declared bounded join-semilattice (§GLOSSARY "Lattice"), keyed in
/// the Named Program by its carrier `NamedType` (§3).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedBoundedLattice {
    pub carrier: NamedType,
    pub bottom: NamedExpression,
    pub top: NamedExpression,
    pub leq: NamedExpression,
    pub lub: NamedExpression,
    pub glb: NamedExpression,
    pub location: Location,
}

/// A Datalog constraint head atom (§4.5).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NamedHeadAtom {
    True,
    False,
    Positive {
        table: QName,
        terms: Vec<NamedExpression>,
        location: Location,
    },
    Negative {
        table: QName,
        terms: Vec<NamedExpression>,
        location: Location,
    },
}

/// A Datalog constraint body atom (§4.5).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NamedBodyAtom {
    Positive {
        table: QName,
        terms: Vec<NamedPattern>,
        location: Location,
    },
    Negative {
        table: QName,
        terms: Vec<NamedPattern>,
        location: Location,
    },
    /// Calls a user-defined predicate or a hook — resolved via Reference
    /// lookup, not Table lookup (§4.5).
    Filter {
        predicate: QName,
        terms: Vec<NamedExpression>,
        location: Location,
    },
    Loop {
        pattern: NamedPattern,
        source: NamedExpression,
        location: Location,
    },
}

/// A Datalog constraint: one head atom plus an ordered sequence of body
/// atoms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedConstraint {
    pub head: NamedHeadAtom,
    pub body: Vec<NamedBodyAtom>,
    pub location: Location,
}

/// A named property — a standalone assertion over the program, resolved the
/// same way a definition body is: just its expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedProperty {
    pub name: Identifier,
    pub expression: NamedExpression,
    pub location: Location,
}
