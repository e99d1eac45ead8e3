//! Operators used by [`crate::expr::NamedExpression::Unary`] and
//! [`crate::expr::NamedExpression::Binary`]. Resolution doesn't interpret
//! these — they're structural payload, carried through recursion unchanged
//! (§4.4: `Unary`, `Binary` are "structural recursion" cases).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOperator {
    Not,
    Neg,
}

/// An infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Neq,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}
