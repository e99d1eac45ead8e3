//! The Resolved Program's type representations: the closed canonical
//! [`Type`] set produced by Type lookup (§4.1), and [`ShapeType`], the
//! structurally-mirrored tree produced by the enum-local Type resolver
//! (§4.2).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pylon_ast::{EnumSymbol, QName, TypeVar};

/// The kind assigned to every resolved enum type by this phase. Richer kinds
/// are a later phase's job (§4.1, §9 "Default kinds"): do not attempt kind
/// inference here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    Star,
}

/// A canonical type (§3): the closed variant set every `NamedType` collapses
/// into once Type lookup has run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum Type {
    Unit,
    Bool,
    Char,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    BigInt,
    Str,

    /// An opaque host type, e.g. the receiver of a `NativeConstructor`/
    /// `NativeMethod` call. Never produced by Type lookup from a `Ref` —
    /// only ever constructed where the Named Program already names it
    /// explicitly.
    Native,

    Enum(EnumSymbol, Kind),
    Tuple(Vec<Type>),
    Arrow(Vec<Type>, Box<Type>),
    Apply(Box<Type>, Vec<Type>),
    Var(TypeVar),
}

/// The structurally-simpler mirror of a `NamedType` tree produced by the
/// Type resolver (§4.2): `Ref` is preserved verbatim rather than
/// disambiguated into a primitive or an enum, so that an enum's own declared
/// shape (e.g. `Option[T]`) keeps its written form for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum ShapeType {
    Var(TypeVar),
    Unit,
    Ref(QName),
    Enum(EnumSymbol),
    Tuple(Vec<ShapeType>),
    Arrow(Vec<ShapeType>, Box<ShapeType>),
    Apply(Box<ShapeType>, Vec<ShapeType>),
}
