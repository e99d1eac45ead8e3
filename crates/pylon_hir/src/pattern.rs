//! The Resolved Program's pattern syntax — the output of the Pattern
//! resolver (§4.3).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pylon_ast::{EnumSymbol, Identifier, Literal, VariableSymbol};
use pylon_filesystem::location::Location;

/// A pattern with every tag reference bound to its owning enum symbol
/// (§4.3). No `QName` survives into this tree (§3 invariant 4).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum ResolvedPattern {
    Literal(Literal),

    Wild(Location),

    Var {
        symbol: VariableSymbol,
        name: Identifier,
        location: Location,
    },

    Tag {
        enum_symbol: EnumSymbol,
        tag: Identifier,
        inner: Box<ResolvedPattern>,
        location: Location,
    },

    Tuple {
        elements: Vec<ResolvedPattern>,
        location: Location,
    },
}

impl ResolvedPattern {
    /// Returns the location of the pattern (§8 property 7: location
    /// preservation).
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            Self::Literal(literal) => literal.location(),
            Self::Wild(location) => *location,
            Self::Var { location, .. } | Self::Tag { location, .. } | Self::Tuple { location, .. } => *location,
        }
    }
}
