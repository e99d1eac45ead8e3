//! The Named Program's expression syntax — walked by the Expression resolver
//! (§4.4), the largest single resolver by the component-share table (§2).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pylon_filesystem::location::Location;

use crate::{
    decl::NamedFormalParameter,
    literal::Literal,
    name::{Identifier, QName},
    operator::{BinaryOperator, UnaryOperator},
    pattern::NamedPattern,
    symbol::VariableSymbol,
    ty::NamedType,
};

/// A native member descriptor — identifies a host-language constructor or
/// method for `NativeConstructor`/`NativeMethod` nodes. Resolution doesn't
/// look this up anywhere (there is no "native lookup" in §4.1); it's carried
/// through verbatim (§4.4: "keep the native member descriptor verbatim").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NativeMember {
    pub class_name: String,
    pub member_name: String,
    pub location: Location,
}

/// One rule of a `match` expression: a pattern, an optional guard, and a
/// body (§4.4 `Match`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedMatchRule {
    pub pattern: NamedPattern,
    pub guard: Option<NamedExpression>,
    pub body: NamedExpression,
}

/// One rule of a `switch` expression: a (condition, body) pair whose order
/// must be preserved (§4.4 `Switch`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedSwitchRule {
    pub condition: NamedExpression,
    pub body: NamedExpression,
}

/// An expression as written in the Named Program — a closed variant set of
/// ~25 cases (§4.4), here collapsed to 19 by folding the eleven literal
/// kinds into one [`Literal`] payload, the way `ry_ast::Expression` folds
/// its literal kinds into `Literal`.
///
/// Most cases (`Apply`, `Lambda`, `Unary`, `Binary`, `IfThenElse`, `Let`,
/// `Tuple`) do nothing but structural recursion; the ones that perform a
/// lookup or otherwise transform are documented on the variant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum NamedExpression {
    Literal(Literal),

    Wild(Location),

    Var {
        symbol: VariableSymbol,
        name: Identifier,
        location: Location,
    },

    /// A value reference — resolved by Reference lookup (§4.1) into either
    /// `Ref(defn.sym)` or a `Hook` node.
    Ref(QName),

    /// A tag constructor application, e.g. `Some(x)`, `E.A(x)` — resolved by
    /// Tag lookup (§4.1).
    Tag {
        enum_qualifier: Option<QName>,
        tag: Identifier,
        inner: Box<NamedExpression>,
        location: Location,
    },

    Apply {
        function: Box<NamedExpression>,
        arguments: Vec<NamedExpression>,
        location: Location,
    },

    Lambda {
        parameters: Vec<NamedFormalParameter>,
        body: Box<NamedExpression>,
        location: Location,
    },

    Unary {
        operator: UnaryOperator,
        operand: Box<NamedExpression>,
        location: Location,
    },

    Binary {
        operator: BinaryOperator,
        lhs: Box<NamedExpression>,
        rhs: Box<NamedExpression>,
        location: Location,
    },

    IfThenElse {
        condition: Box<NamedExpression>,
        then_branch: Box<NamedExpression>,
        else_branch: Box<NamedExpression>,
        location: Location,
    },

    Let {
        pattern: NamedPattern,
        value: Box<NamedExpression>,
        body: Box<NamedExpression>,
        location: Location,
    },

    Tuple {
        elements: Vec<NamedExpression>,
        location: Location,
    },

    /// Recurse the scrutinee; for each rule resolve pattern, guard, and
    /// body (§4.4 `Match`).
    Match {
        scrutinee: Box<NamedExpression>,
        rules: Vec<NamedMatchRule>,
        location: Location,
    },

    /// Each rule is a (condition, body) pair; both sides resolve and order
    /// is preserved (§4.4 `Switch`).
    Switch {
        rules: Vec<NamedSwitchRule>,
        location: Location,
    },

    /// Recurse the expression; resolve `ty` via Type lookup (§4.4
    /// `Ascribe`).
    Ascribe {
        expression: Box<NamedExpression>,
        ty: NamedType,
        location: Location,
    },

    /// Resolve the formal parameter, then the body (§4.4
    /// `Existential`/`Universal`).
    Existential {
        parameter: NamedFormalParameter,
        body: Box<NamedExpression>,
        location: Location,
    },

    /// Resolve the formal parameter, then the body (§4.4
    /// `Existential`/`Universal`).
    Universal {
        parameter: NamedFormalParameter,
        body: Box<NamedExpression>,
        location: Location,
    },

    /// Recurse arguments; the native member descriptor is carried verbatim
    /// (§4.4 `NativeConstructor`/`NativeMethod`).
    NativeConstructor {
        member: NativeMember,
        arguments: Vec<NamedExpression>,
        location: Location,
    },

    /// Recurse arguments; the native member descriptor is carried verbatim
    /// (§4.4 `NativeConstructor`/`NativeMethod`).
    NativeMethod {
        member: NativeMember,
        arguments: Vec<NamedExpression>,
        location: Location,
    },

    UserError(Location),
}

impl NamedExpression {
    /// Returns the location of the expression.
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            Self::Literal(literal) => literal.location(),
            Self::Wild(location) | Self::UserError(location) => *location,
            Self::Var { location, .. } => *location,
            Self::Ref(qname) => qname.location,
            Self::Tag { location, .. }
            | Self::Apply { location, .. }
            | Self::Lambda { location, .. }
            | Self::Unary { location, .. }
            | Self::Binary { location, .. }
            | Self::IfThenElse { location, .. }
            | Self::Let { location, .. }
            | Self::Tuple { location, .. }
            | Self::Match { location, .. }
            | Self::Switch { location, .. }
            | Self::Ascribe { location, .. }
            | Self::Existential { location, .. }
            | Self::Universal { location, .. }
            | Self::NativeConstructor { location, .. }
            | Self::NativeMethod { location, .. } => *location,
        }
    }
}
