//! Declaration symbols.
//!
//! Every declaration is assigned a canonical symbol during the earlier
//! naming phase (§3: "Resolution never mints new symbols; it *binds* textual
//! references to existing ones."). These newtypes distinguish the four kinds
//! of declaration identity so that, say, a table symbol can never be handed
//! to something expecting a definition symbol.
//!
//! None of these are interned [`pylon_interner::Symbol`] — that type
//! identifies interned *text*; a `DefinitionSymbol` identifies one
//! particular declaration, even if ten declarations share a spelling.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The canonical identity of a value/function definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DefinitionSymbol(pub u32);

/// The canonical identity of an enum declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnumSymbol(pub u32);

/// The canonical identity of a table declaration (relation or lattice-valued).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableSymbol(pub u32);

/// The canonical identity of a bound variable (a formal parameter, a
/// let-bound name, a pattern variable, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableSymbol(pub u32);

/// A type variable, left unresolved by this phase (§3 Non-goals: "may leave
/// type variables unresolved where it cannot infer a kind").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeVar(pub u32);

/// An entry point symbol, as recorded in `NamedProgram::reachable` (§3). Any
/// of the three declaration kinds that have their own namespace-indexed map
/// can be an entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReachableSymbol {
    Definition(DefinitionSymbol),
    Enum(EnumSymbol),
    Table(TableSymbol),
}
