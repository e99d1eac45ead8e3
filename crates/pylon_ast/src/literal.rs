//! Literal values shared by [`crate::expr::NamedExpression`] and
//! [`crate::pattern::NamedPattern`].
//!
//! Collapsing the closed set of primitive literal kinds into one `Literal`
//! type (rather than one expression/pattern variant per kind) mirrors
//! `ry_ast::Literal`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pylon_filesystem::location::Location;

/// A literal value of one of the closed primitive kinds (§3: the Resolved
/// Program's `Type` closed set, minus `Native`, `Enum`, `Tuple`, `Arrow`,
/// `Apply`, `Var`, which have no literal syntax of their own).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "literal_kind"))]
pub enum Literal {
    Unit { location: Location },
    Bool { value: bool, location: Location },
    Char { value: char, location: Location },
    Float32 { value: f32, location: Location },
    Float64 { value: f64, location: Location },
    Int8 { value: i8, location: Location },
    Int16 { value: i16, location: Location },
    Int32 { value: i32, location: Location },
    Int64 { value: i64, location: Location },

    /// A big integer literal. Stored as its original source text: resolution
    /// doesn't evaluate expressions (§1 Non-goals), so there is no reason to
    /// parse it into an arbitrary-precision type here.
    BigInt { value: String, location: Location },

    Str { value: String, location: Location },
}

impl Literal {
    /// Returns the location of the literal.
    #[inline]
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Unit { location }
            | Self::Bool { location, .. }
            | Self::Char { location, .. }
            | Self::Float32 { location, .. }
            | Self::Float64 { location, .. }
            | Self::Int8 { location, .. }
            | Self::Int16 { location, .. }
            | Self::Int32 { location, .. }
            | Self::Int64 { location, .. }
            | Self::BigInt { location, .. }
            | Self::Str { location, .. } => *location,
        }
    }
}
