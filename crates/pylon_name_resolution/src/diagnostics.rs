//! The name-resolution error taxonomy (§7) and its [`BuildDiagnostic`]
//! impl. Codes live in the `E1xx` namespace, distinct from the `E0xx` range
//! the (out-of-scope) naming phase and parser use (§2 of SPEC_FULL.md).

use pylon_ast::{HookKey, Identifier, NName, QName};
use pylon_diagnostics::{BuildDiagnostic, Diagnostic, Label};
use pylon_filesystem::location::Location;

/// Every way resolution can fail (§7), plus
/// [`Self::HookUsedAsPredicate`], added per §9's open question (see §5 of
/// SPEC_FULL.md: a hook resolved in Datalog filter position is a deliberate
/// phase-validation failure rather than a silently-accepted node).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// Reference lookup found no definition and no hook, and no root
    /// fallback applied (§7).
    UndefinedRef { qname: QName, current_ns: NName },

    /// Reference lookup found both a definition and a hook (§7).
    AmbiguousRef { qname: QName, current_ns: NName },

    /// Table lookup found no table (§7).
    UndefinedTable { qname: QName, current_ns: NName },

    /// Type lookup found no primitive and no enum (§7).
    UndefinedType { qname: QName, current_ns: NName },

    /// Tag lookup found no match, or multiple matched but an enum qualifier
    /// failed to disambiguate them (§7, §4.1 steps 5 and 7).
    UndefinedTag {
        tag: Identifier,
        current_ns: NName,
        location: Location,
    },

    /// Tag lookup found multiple candidates and no enum qualifier was given
    /// (§7, §4.1 step 6). `candidates` is sorted in source order (§5 of
    /// SPEC_FULL.md: by `(start, end)`, since `Location` has no `Ord`).
    AmbiguousTag {
        tag: Identifier,
        current_ns: NName,
        candidates: Vec<Location>,
        location: Location,
    },

    /// A Datalog filter's Reference lookup resolved to a hook (§9, §5 of
    /// SPEC_FULL.md).
    HookUsedAsPredicate { hook: HookKey, location: Location },
}

impl ResolutionError {
    /// The primary source location this error should be reported at (§7:
    /// "Locations must be preserved from the Named AST unchanged").
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            Self::UndefinedRef { qname, .. }
            | Self::AmbiguousRef { qname, .. }
            | Self::UndefinedTable { qname, .. }
            | Self::UndefinedType { qname, .. } => qname.location,
            Self::UndefinedTag { location, .. }
            | Self::AmbiguousTag { location, .. }
            | Self::HookUsedAsPredicate { location, .. } => *location,
        }
    }
}

impl BuildDiagnostic for ResolutionError {
    fn build(&self) -> Diagnostic {
        match self {
            Self::UndefinedRef { qname, .. } => Diagnostic::error()
                .with_code("E101")
                .with_message("reference to an undefined name")
                .with_labels([Label::primary(qname.location).with_message("not found in scope")]),

            Self::AmbiguousRef { qname, .. } => Diagnostic::error()
                .with_code("E102")
                .with_message("reference is ambiguous between a definition and a hook")
                .with_labels([
                    Label::primary(qname.location).with_message("could mean either one"),
                ]),

            Self::UndefinedTable { qname, .. } => Diagnostic::error()
                .with_code("E103")
                .with_message("reference to an undefined table")
                .with_labels([Label::primary(qname.location).with_message("no such table")]),

            Self::UndefinedType { qname, .. } => Diagnostic::error()
                .with_code("E104")
                .with_message("reference to an undefined type")
                .with_labels([
                    Label::primary(qname.location).with_message("not a primitive or a known enum"),
                ]),

            Self::UndefinedTag { location, .. } => Diagnostic::error()
                .with_code("E105")
                .with_message("reference to an undefined tag")
                .with_labels([Label::primary(*location).with_message("no enum owns this tag")]),

            Self::AmbiguousTag { candidates, location, .. } => Diagnostic::error()
                .with_code("E106")
                .with_message("tag is ambiguous between multiple enums")
                .with_labels(
                    std::iter::once(Label::primary(*location).with_message("ambiguous here")).chain(
                        candidates
                            .iter()
                            .map(|candidate| Label::secondary(*candidate).with_message("candidate enum")),
                    ),
                ),

            Self::HookUsedAsPredicate { location, .. } => Diagnostic::error()
                .with_code("E107")
                .with_message("a hook cannot be used as a Datalog filter predicate")
                .with_labels([
                    Label::primary(*location).with_message("resolves to a hook, not a user-defined predicate"),
                ]),
        }
    }
}
