//! The Resolved Program's expression syntax — the output of the Expression
//! resolver (§4.4).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pylon_ast::{
    BinaryOperator, DefinitionSymbol, EnumSymbol, HookKey, Identifier, Literal, NativeMember,
    UnaryOperator, VariableSymbol,
};
use pylon_filesystem::location::Location;

use crate::{decl::ResolvedFormalParameter, pattern::ResolvedPattern, ty::Type};

/// One resolved rule of a `match` expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedMatchRule {
    pub pattern: ResolvedPattern,
    pub guard: Option<ResolvedExpression>,
    pub body: ResolvedExpression,
}

/// One resolved rule of a `switch` expression; order is preserved (§4.4
/// `Switch`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedSwitchRule {
    pub condition: ResolvedExpression,
    pub body: ResolvedExpression,
}

/// A resolved expression: no `QName` survives into this tree (§3 invariant
/// 4) — every `Ref` has become either a bound [`DefinitionSymbol`] or a
/// distinct `Hook` node (§4.4: "success `Defn` becomes `Ref(defn.sym)`;
/// `Hook` case is a distinct resolved node"), and every `Tag` now carries
/// its owning [`EnumSymbol`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum ResolvedExpression {
    Literal(Literal),

    Wild(Location),

    Var {
        symbol: VariableSymbol,
        name: Identifier,
        location: Location,
    },

    Ref(DefinitionSymbol, Location),

    Hook(HookKey, Location),

    Tag {
        enum_symbol: EnumSymbol,
        tag: Identifier,
        inner: Box<ResolvedExpression>,
        location: Location,
    },

    Apply {
        function: Box<ResolvedExpression>,
        arguments: Vec<ResolvedExpression>,
        location: Location,
    },

    Lambda {
        parameters: Vec<ResolvedFormalParameter>,
        body: Box<ResolvedExpression>,
        location: Location,
    },

    Unary {
        operator: UnaryOperator,
        operand: Box<ResolvedExpression>,
        location: Location,
    },

    Binary {
        operator: BinaryOperator,
        lhs: Box<ResolvedExpression>,
        rhs: Box<ResolvedExpression>,
        location: Location,
    },

    IfThenElse {
        condition: Box<ResolvedExpression>,
        then_branch: Box<ResolvedExpression>,
        else_branch: Box<ResolvedExpression>,
        location: Location,
    },

    Let {
        pattern: ResolvedPattern,
        value: Box<ResolvedExpression>,
        body: Box<ResolvedExpression>,
        location: Location,
    },

    Tuple {
        elements: Vec<ResolvedExpression>,
        location: Location,
    },

    Match {
        scrutinee: Box<ResolvedExpression>,
        rules: Vec<ResolvedMatchRule>,
        location: Location,
    },

    Switch {
        rules: Vec<ResolvedSwitchRule>,
        location: Location,
    },

    Ascribe {
        expression: Box<ResolvedExpression>,
        ty: Type,
        location: Location,
    },

    Existential {
        parameter: ResolvedFormalParameter,
        body: Box<ResolvedExpression>,
        location: Location,
    },

    Universal {
        parameter: ResolvedFormalParameter,
        body: Box<ResolvedExpression>,
        location: Location,
    },

    NativeConstructor {
        member: NativeMember,
        arguments: Vec<ResolvedExpression>,
        location: Location,
    },

    NativeMethod {
        member: NativeMember,
        arguments: Vec<ResolvedExpression>,
        location: Location,
    },

    UserError(Location),
}

impl ResolvedExpression {
    /// Returns the location of the expression (§8 property 7: location
    /// preservation).
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            Self::Literal(literal) => literal.location(),
            Self::Wild(location) | Self::UserError(location) => *location,
            Self::Var { location, .. } => *location,
            Self::Ref(_, location) | Self::Hook(_, location) => *location,
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
