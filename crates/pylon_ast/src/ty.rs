//! The Named Program's type syntax — the input to both the lookup layer's
//! Type lookup (§4.1) and the enum-local Type resolver (§4.2).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pylon_filesystem::location::Location;

use crate::{name::QName, symbol::{EnumSymbol, TypeVar}};

/// A type as written in the Named Program, before Type lookup has
/// disambiguated `Ref` into a primitive or an enum (§4.1).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum NamedType {
    /// A type variable, passed through unchanged by both the Type lookup and
    /// the Type resolver.
    Var(TypeVar),

    Unit,

    /// A (possibly qualified) name reference — could name a primitive or an
    /// enum; disambiguated by Type lookup (§4.1).
    Ref(QName),

    /// An enum already identified by symbol, e.g. synthesized by an earlier
    /// phase. Type lookup maps this straight to `Type::Enum(sym, Star)`.
    Enum(EnumSymbol),

    Tuple(Vec<NamedType>),

    Arrow(Vec<NamedType>, Box<NamedType>),

    Apply(Box<NamedType>, Vec<NamedType>),
}

impl NamedType {
    /// Returns the location of the type, where one is available.
    ///
    /// `Var` and `Enum(sym)` carry no location of their own in the Named
    /// Program (they're synthesized, not written), so this returns `None`
    /// for those two cases.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        match self {
            Self::Var(_) | Self::Enum(_) => None,
            Self::Unit => None,
            Self::Ref(qname) => Some(qname.location),
            Self::Tuple(elements) => elements.first().and_then(NamedType::location),
            Self::Arrow(_, ret) => ret.location(),
            Self::Apply(base, _) => base.location(),
        }
    }
}
