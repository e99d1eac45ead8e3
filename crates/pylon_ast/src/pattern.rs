//! The Named Program's pattern syntax — walked by the Pattern resolver
//! (§4.3).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pylon_filesystem::location::Location;

use crate::{literal::Literal, name::{Identifier, QName}, symbol::VariableSymbol};

/// A pattern as written in the Named Program.
///
/// Literals, wildcard, and variable patterns pass through resolution
/// unchanged; tuple patterns recurse on their elements; tag patterns are the
/// one case that does real work, via Tag lookup (§4.1, §4.3).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum NamedPattern {
    Literal(Literal),

    Wild { location: Location },

    Var {
        symbol: VariableSymbol,
        name: Identifier,
        location: Location,
    },

    /// A tag pattern, e.g. `A(x)`, `E.A(x)`. `enum_qualifier` is the
    /// optional `E` in `E.A(x)`, consulted only for disambiguation (§4.1
    /// step 7).
    Tag {
        enum_qualifier: Option<QName>,
        tag: Identifier,
        inner: Box<NamedPattern>,
        location: Location,
    },

    Tuple {
        elements: Vec<NamedPattern>,
        location: Location,
    },
}

impl NamedPattern {
    /// Returns the location of the pattern.
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            Self::Literal(literal) => literal.location(),
            Self::Wild { location }
            | Self::Var { location, .. }
            | Self::Tag { location, .. }
            | Self::Tuple { location, .. } => *location,
        }
    }
}
